//! Q-table keyed by canonical board encoding

use std::collections::{BTreeMap, HashMap};

use crate::{
    config::TabularConfig,
    tictactoe::Board,
    types::{Position, StateKey},
};

/// Q-table mapping each visited state to per-move value estimates.
///
/// Per-state values are ordered by position, so greedy selection breaks
/// ties in row-major order.
#[derive(Debug, Clone)]
pub struct QTable {
    values: HashMap<StateKey, BTreeMap<Position, f64>>,
    config: TabularConfig,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new(config: TabularConfig) -> Self {
        Self {
            values: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &TabularConfig {
        &self.config
    }

    /// Register a board, initializing its moves on the first visit.
    ///
    /// Returns the board's key.
    pub fn visit(&mut self, board: &Board) -> StateKey {
        let key = board.encode();
        let q_init = self.config.q_init;
        self.values.entry(key.clone()).or_insert_with(|| {
            board
                .available_moves()
                .into_iter()
                .map(|position| (position, q_init))
                .collect()
        });
        key
    }

    /// Value estimates of a visited state
    pub fn values(&self, key: &StateKey) -> Option<&BTreeMap<Position, f64>> {
        self.values.get(key)
    }

    /// Value estimate of one move in a visited state
    pub fn get(&self, key: &StateKey, position: Position) -> Option<f64> {
        self.values.get(key)?.get(&position).copied()
    }

    /// Best-valued move of a board, visiting it first if needed.
    ///
    /// Returns `None` for a board without moves.
    pub fn greedy_move(&mut self, board: &Board) -> Option<Position> {
        let key = self.visit(board);
        let mut best: Option<(Position, f64)> = None;
        for (&position, &value) in self.values.get(&key)? {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((position, value));
            }
        }
        best.map(|(position, _)| position)
    }

    /// Highest value estimate of a visited state
    fn max_value(&self, key: &StateKey) -> Option<f64> {
        self.values
            .get(key)?
            .values()
            .copied()
            .reduce(f64::max)
    }

    /// One-step update of `Q(board, position)` towards the successor `next`.
    ///
    /// A terminal successor, or one without moves, contributes only `reward`.
    /// Returns the updated value.
    pub fn update(
        &mut self,
        board: &Board,
        position: Position,
        reward: f64,
        next: &Board,
        terminal: bool,
    ) -> f64 {
        let key = self.visit(board);
        let next_key = self.visit(next);

        let target = match self.max_value(&next_key) {
            Some(max_next) if !terminal => reward + self.config.discount_factor * max_next,
            _ => reward,
        };

        let learning_rate = self.config.learning_rate;
        let q_init = self.config.q_init;
        let value = self
            .values
            .entry(key)
            .or_default()
            .entry(position)
            .or_insert(q_init);
        *value += learning_rate * (target - *value);
        *value
    }

    /// Forget every state
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Number of states visited
    pub fn size(&self) -> usize {
        self.values.len()
    }
}
