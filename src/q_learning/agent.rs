//! Greedy tabular agent

use crate::{
    Error, Result,
    config::TabularConfig,
    ports::Strategy,
    q_learning::q_table::QTable,
    tictactoe::{Board, Side, board_winner},
    types::Position,
};

/// Q-value agent that always plays its best-valued move.
///
/// Exploration comes from optimistic initial values rather than random
/// moves.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    table: QTable,
    winning_length: usize,
}

impl QLearningAgent {
    /// Create a new agent for games won with `winning_length` in a row
    pub fn new(config: TabularConfig, winning_length: usize) -> Self {
        Self {
            table: QTable::new(config),
            winning_length,
        }
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    /// Learn from playing `position` for `side` on `board`.
    ///
    /// The reward is +1 if the move wins for `side` and 0 otherwise. Returns
    /// the updated value of the move.
    ///
    /// # Errors
    ///
    /// Returns the board's legality errors if the move cannot be played.
    pub fn learn(&mut self, board: &Board, position: Position, side: Side) -> Result<f64> {
        let next = board.apply_move(position, side)?;
        let winner = board_winner(&next, self.winning_length);
        let reward = winner.map_or(0.0, |winner| f64::from(winner.value() * side.value()));
        let terminal = winner.is_some() || next.is_full();

        Ok(self.table.update(board, position, reward, &next, terminal))
    }

    /// Forget everything learned
    pub fn reset(&mut self) {
        self.table.reset();
    }
}

impl Strategy for QLearningAgent {
    fn select_move(&mut self, board: &Board, _side: Side) -> Result<Position> {
        self.table.greedy_move(board).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "q-learning"
    }
}
