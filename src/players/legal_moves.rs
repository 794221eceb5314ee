//! Adapter for players that only look at the legal move list

use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Side},
    types::Position,
};

/// Wraps a `FnMut(&[Position]) -> Position` as a [`Strategy`].
///
/// The closure receives [`Board::available_moves`] and never sees an empty
/// list; a full board yields [`Error::NoValidMoves`] instead.
///
/// # Examples
///
/// ```
/// use tictactoe_lab::{
///     players::LegalMovesStrategy,
///     ports::Strategy,
///     tictactoe::{Board, Side},
/// };
///
/// let mut last = LegalMovesStrategy::new("last", |moves| moves[moves.len() - 1]);
/// let position = last.select_move(&Board::new(3), Side::PlayerOne)?;
/// assert_eq!((position.row, position.col), (2, 2));
/// # Ok::<(), tictactoe_lab::Error>(())
/// ```
pub struct LegalMovesStrategy<F> {
    name: String,
    choose: F,
}

impl<F> LegalMovesStrategy<F>
where
    F: FnMut(&[Position]) -> Position,
{
    pub fn new(name: impl Into<String>, choose: F) -> Self {
        Self {
            name: name.into(),
            choose,
        }
    }
}

impl<F> Strategy for LegalMovesStrategy<F>
where
    F: FnMut(&[Position]) -> Position,
{
    fn select_move(&mut self, board: &Board, _side: Side) -> Result<Position> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        Ok((self.choose)(&moves))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
