//! Common test utilities for the tictactoe_lab test suite.

#![allow(dead_code)]

use std::collections::VecDeque;

use tictactoe_lab::{
    Board, Error, Position, Result, Side,
    ports::Strategy,
};

/// Plays a fixed list of positions in order, whatever the board says.
pub struct ScriptedStrategy {
    moves: VecDeque<Position>,
}

impl ScriptedStrategy {
    pub fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().copied().map(Position::from).collect(),
        }
    }
}

impl Strategy for ScriptedStrategy {
    fn select_move(&mut self, _board: &Board, _side: Side) -> Result<Position> {
        self.moves.pop_front().ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Build a 3x3 board from rows of cell values.
pub fn board_3x3(rows: [[i8; 3]; 3]) -> Board {
    Board::from_values(rows.as_flattened()).expect("3x3 board is square")
}
