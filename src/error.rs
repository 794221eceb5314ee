//! Error types for the tic-tac-toe lab crate

use thiserror::Error;

use crate::{tictactoe::Side, types::Position};

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: position {position} is already occupied by {occupant}")]
    IllegalMove { position: Position, occupant: Side },

    #[error("position {position} is out of bounds for a {size}x{size} board")]
    PositionOutOfBounds { position: Position, size: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("invalid cell value {value} at index {index} (expected 0, 1 or -1)")]
    InvalidCellValue { value: i8, index: usize },

    #[error("board is not square: {cells} cells do not form an NxN grid")]
    NonSquareBoard { cells: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
