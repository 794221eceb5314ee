//! Observer port - abstraction for watching batches of games
//!
//! Observers collect data while the pipeline plays games, without coupling
//! the game loop to progress bars, logging or metrics.

use crate::{Result, tictactoe::GameOutcome};

/// Observer trait for monitoring a run of games
///
/// # Event Sequence
///
/// 1. `on_run_start(total_games)` - Once at the beginning
/// 2. `on_game_end(game_num, outcome)` - After each game
/// 3. `on_run_end()` - Once at the end
///
/// # Examples
///
/// ```
/// use tictactoe_lab::{ports::Observer, tictactoe::GameOutcome};
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> tictactoe_lab::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called before the first game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_run_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each game with its 1-based number and outcome.
    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()>;

    /// Called after the last game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to finalize outputs or display summaries.
    fn on_run_end(&mut self) -> Result<()> {
        Ok(())
    }
}
