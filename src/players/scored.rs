//! Player driven by an externally trained scoring function

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Board, Side},
    types::Position,
};

/// Scores each successor board's [`Board::features`] and plays the best one.
///
/// The scorer estimates the game value for player one (for example a
/// regression network trained on [`crate::tictactoe::regression_dataset`]),
/// so player one takes the maximum and player two the minimum.
pub struct ScoredStrategy<F> {
    name: String,
    scorer: F,
}

impl<F> ScoredStrategy<F>
where
    F: FnMut(&[f32]) -> f64,
{
    pub fn new(name: impl Into<String>, scorer: F) -> Self {
        Self {
            name: name.into(),
            scorer,
        }
    }
}

impl<F> Strategy for ScoredStrategy<F>
where
    F: FnMut(&[f32]) -> f64,
{
    fn select_move(&mut self, board: &Board, side: Side) -> Result<Position> {
        let scorer = &mut self.scorer;
        super::best_successor(board, side, |next| scorer(next.features().as_slice()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
