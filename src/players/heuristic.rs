//! Greedy player on the evaluation function

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, Side, evaluate},
    types::Position,
};

/// Plays the move whose resulting board [`evaluate`]s best for its side.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    winning_length: usize,
}

impl HeuristicStrategy {
    pub fn new(winning_length: usize) -> Self {
        Self { winning_length }
    }
}

impl Strategy for HeuristicStrategy {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Position> {
        let winning_length = self.winning_length;
        super::best_successor(board, side, |next| {
            evaluate(next, winning_length) as f64
        })
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
