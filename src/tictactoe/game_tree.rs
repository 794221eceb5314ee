//! Exhaustive state enumeration and outcome statistics

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Board, Side, lines::board_winner};
use crate::{Result, analysis::OutcomeTally, config::GameConfig, types::StateKey};

/// One training example for a board-value regressor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Row-major cell values of the position
    pub features: Vec<f32>,
    /// Mean outcome over every continuation: +1 player one, -1 player two
    pub target: f64,
}

/// Whether `board` is won or full
pub fn is_terminal(board: &Board, winning_length: usize) -> bool {
    board_winner(board, winning_length).is_some() || board.is_full()
}

/// Every distinct board reachable from `board` by alternating legal play,
/// starting with `side_to_play`.
///
/// Play stops at wins and full boards. The start board is only included when
/// it is itself terminal. Each board is paired with the side to move in it,
/// and the result is sorted by row-major cell values, descending.
pub fn reachable_states(
    board: &Board,
    side_to_play: Side,
    winning_length: usize,
) -> Vec<(Board, Side)> {
    if is_terminal(board, winning_length) {
        return vec![(board.clone(), side_to_play)];
    }

    let mut visited: HashSet<StateKey> = HashSet::new();
    let mut states = Vec::new();
    let mut to_explore = vec![(board.clone(), side_to_play)];

    while let Some((state, side)) = to_explore.pop() {
        if is_terminal(&state, winning_length) {
            continue;
        }

        for position in state.available_moves() {
            let Ok(next) = state.apply_move(position, side) else {
                continue;
            };
            if visited.insert(next.encode()) {
                states.push((next.clone(), side.opponent()));
                to_explore.push((next, side.opponent()));
            }
        }
    }

    states.sort_by(|(a, _), (b, _)| b.values().cmp(&a.values()));
    states
}

/// Memoized counter of terminal outcomes below a position
#[derive(Debug)]
struct OutcomeCounter {
    winning_length: usize,
    memo: HashMap<(StateKey, Side), OutcomeTally>,
}

impl OutcomeCounter {
    fn new(winning_length: usize) -> Self {
        Self {
            winning_length,
            memo: HashMap::new(),
        }
    }

    fn count(&mut self, board: &Board, side: Side) -> OutcomeTally {
        let key = (board.encode(), side);
        if let Some(tally) = self.memo.get(&key) {
            return *tally;
        }

        let mut tally = OutcomeTally::new();
        if let Some(winner) = board_winner(board, self.winning_length) {
            tally.record_winner(Some(winner));
        } else if board.is_full() {
            tally.record_winner(None);
        } else {
            for position in board.available_moves() {
                let Ok(next) = board.apply_move(position, side) else {
                    continue;
                };
                tally += self.count(&next, side.opponent());
            }
        }

        self.memo.insert(key, tally);
        tally
    }
}

/// Outcomes of every complete continuation of `board` with `side_to_play`
/// moving next. A terminal board counts as a single game.
pub fn outcome_counts(board: &Board, side_to_play: Side, winning_length: usize) -> OutcomeTally {
    OutcomeCounter::new(winning_length).count(board, side_to_play)
}

/// Regression samples for every state reachable from the empty board.
///
/// Each target is the mean outcome over all continuations of the state,
/// played with the side actually to move there.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfiguration`] for an unplayable config.
pub fn regression_dataset(config: GameConfig, first: Side) -> Result<Vec<Sample>> {
    config.validate()?;

    let root = Board::new(config.size);
    let mut counter = OutcomeCounter::new(config.winning_length);

    Ok(reachable_states(&root, first, config.winning_length)
        .into_iter()
        .map(|(board, side)| Sample {
            features: board.features(),
            target: counter.count(&board, side).mean_outcome(),
        })
        .collect())
}
