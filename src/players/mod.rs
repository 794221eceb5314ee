//! Player strategies that need no learned state
//!
//! - [`RandomStrategy`]: uniform over legal moves
//! - [`HeuristicStrategy`]: one-ply search on the evaluation function
//! - [`ScoredStrategy`]: one-ply search on an externally trained scorer
//! - [`LegalMovesStrategy`]: adapter for closures over the legal move list
//!
//! The tabular player lives in [`crate::q_learning`].

pub mod heuristic;
pub mod legal_moves;
pub mod random;
pub mod scored;

pub use heuristic::HeuristicStrategy;
pub use legal_moves::LegalMovesStrategy;
pub use random::RandomStrategy;
pub use scored::ScoredStrategy;

use crate::{
    Error, Result,
    tictactoe::{Board, Side},
    types::Position,
};

/// Pick the successor with the best score for `side`.
///
/// Scores are from player one's point of view, so player two minimizes.
/// Ties go to the earliest move in row-major order.
pub(crate) fn best_successor<F>(board: &Board, side: Side, mut score: F) -> Result<Position>
where
    F: FnMut(&Board) -> f64,
{
    let sign = f64::from(side.value());
    let mut best: Option<(Position, f64)> = None;

    for position in board.available_moves() {
        let next = board.apply_move(position, side)?;
        let value = sign * score(&next);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((position, value));
        }
    }

    best.map(|(position, _)| position).ok_or(Error::NoValidMoves)
}
