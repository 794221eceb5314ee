//! Newtype wrappers for board coordinates and state keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the board, 0-indexed.
///
/// Positions order row-major, so sorting a set of positions yields the same
/// top-to-bottom, left-to-right order as [`crate::tictactoe::Board::available_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Build a position from a row-major flat index on a `size`x`size` board.
    pub fn from_index(index: usize, size: usize) -> Self {
        Position {
            row: index / size,
            col: index % size,
        }
    }

    /// Row-major flat index on a `size`x`size` board.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Check whether the position lies on a `size`x`size` board.
    pub fn is_within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Canonical encoding of a board used as a lookup key.
///
/// One base-3 digit per cell in row-major order: `0` empty, `1` player one,
/// `2` player two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    pub(crate) fn from_digits(digits: String) -> Self {
        StateKey(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
