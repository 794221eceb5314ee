//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    types::{Position, StateKey},
};

/// A side in the game, represented numerically as +1 or -1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    /// Numeric value of the side: 1 for player one, -1 for player two
    pub fn value(self) -> i8 {
        match self {
            Side::PlayerOne => 1,
            Side::PlayerTwo => -1,
        }
    }

    /// Convert side to the cell it marks
    pub fn to_cell(self) -> Cell {
        match self {
            Side::PlayerOne => Cell::PlayerOne,
            Side::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::PlayerOne => f.write_str("player one"),
            Side::PlayerTwo => f.write_str("player two"),
        }
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Numeric value of the cell: 0, 1 or -1
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => -1,
        }
    }

    pub fn from_value(value: i8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            -1 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    /// The side occupying this cell, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Side::PlayerOne),
            Cell::PlayerTwo => Some(Side::PlayerTwo),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    fn digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::PlayerOne => '1',
            Cell::PlayerTwo => '2',
        }
    }
}

/// A square N x N board stored row-major in a flat array.
///
/// Cell `(row, col)` lives at index `row * size + col`. Serialized as the
/// row-major cell values; deserialization goes through
/// [`Board::from_values`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i8>", into = "Vec<i8>")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from row-major cell values (0, 1 or -1).
    ///
    /// # Errors
    ///
    /// Returns error if the number of values is not a perfect square or any
    /// value is outside `{0, 1, -1}`.
    pub fn from_values(values: &[i8]) -> Result<Self> {
        let size = (values.len() as f64).sqrt().round() as usize;
        if size * size != values.len() {
            return Err(Error::NonSquareBoard {
                cells: values.len(),
            });
        }

        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Cell::from_value(value).ok_or(Error::InvalidCellValue { value, index })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Board { size, cells })
    }

    /// Length of a side of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at a position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index(self.size)]
    }

    pub(crate) fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, position: Position) -> bool {
        position.is_within(self.size) && self.get(position) == Cell::Empty
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    fn check_move(&self, position: Position) -> Result<usize> {
        if !position.is_within(self.size) {
            return Err(Error::PositionOutOfBounds {
                position,
                size: self.size,
            });
        }

        let index = position.index(self.size);
        if let Some(occupant) = self.cells[index].side() {
            return Err(Error::IllegalMove { position, occupant });
        }

        Ok(index)
    }

    /// Apply a move and return a new board
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the position is already occupied, or
    /// [`Error::PositionOutOfBounds`] if it is not on the board.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, position: Position, side: Side) -> Result<Board> {
        let mut next = self.clone();
        next.apply_move_in_place(position, side)?;
        Ok(next)
    }

    /// Apply a move to this board without copying.
    ///
    /// Legality is checked before mutation, so a failed call leaves the board
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Board::apply_move`].
    pub fn apply_move_in_place(&mut self, position: Position, side: Side) -> Result<()> {
        let index = self.check_move(position)?;
        self.cells[index] = side.to_cell();
        Ok(())
    }

    /// All empty positions in row-major order
    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| Position::from_index(index, self.size))
            .collect()
    }

    /// Row-major cell values (0, 1 or -1)
    pub fn values(&self) -> Vec<i8> {
        self.cells.iter().map(|cell| cell.value()).collect()
    }

    /// Row-major cell values as network input features
    pub fn features(&self) -> Vec<f32> {
        self.cells.iter().map(|cell| f32::from(cell.value())).collect()
    }

    /// Canonical string encoding for use as a lookup key
    pub fn encode(&self) -> StateKey {
        StateKey::from_digits(self.cells.iter().map(|cell| cell.digit()).collect())
    }
}

impl TryFrom<Vec<i8>> for Board {
    type Error = Error;

    fn try_from(values: Vec<i8>) -> Result<Self> {
        Board::from_values(&values)
    }
}

impl From<Board> for Vec<i8> {
    fn from(board: Board) -> Self {
        board.values()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
