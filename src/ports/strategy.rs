//! Strategy port - one interface for every kind of player
//!
//! All players take the board and the side they are playing, and return the
//! position they want to mark:
//! - Baselines (random)
//! - Heuristic search over [`crate::tictactoe::evaluate`]
//! - Tabular Q-value players
//! - Externally scored players (trained networks)
//!
//! Players written against the list of legal moves instead of the board are
//! adapted with [`crate::players::LegalMovesStrategy`].

use crate::{
    Result,
    tictactoe::{Board, Side},
    types::Position,
};

/// Strategy trait - Unified interface for all players
///
/// # Examples
///
/// ```
/// use tictactoe_lab::{
///     ports::Strategy,
///     tictactoe::{Board, Side},
///     types::Position,
/// };
///
/// /// Always takes the first free cell.
/// struct FirstFree;
///
/// impl Strategy for FirstFree {
///     fn select_move(&mut self, board: &Board, _side: Side) -> tictactoe_lab::Result<Position> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(tictactoe_lab::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut player = FirstFree;
/// assert_eq!(player.select_move(&Board::new(3), Side::PlayerOne)?, Position::new(0, 0));
/// # Ok::<(), tictactoe_lab::Error>(())
/// ```
pub trait Strategy {
    /// Select a move for `side` on the given board.
    ///
    /// The returned position should be one of
    /// [`Board::available_moves`]; an occupied position is rejected by the
    /// game with [`crate::Error::IllegalMove`].
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available.
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Position>;

    /// Get the strategy's name.
    ///
    /// Used for identification in reports and logging.
    fn name(&self) -> &str;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Position> {
        (**self).select_move(board, side)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
