//! Line extraction and win detection
//!
//! Lines are read off the flat board with a start cell and a `(row, col)`
//! step. Rows step `(0, 1)`, columns `(1, 0)`, main diagonals `(1, 1)` and
//! anti diagonals `(-1, 1)` (bottom-left towards top-right).

use super::{Board, Cell, Side};

/// A row, column or diagonal slice of the board
pub type Line = Vec<Cell>;

/// Walk from `(row, col)` in steps of `(d_row, d_col)` until leaving the board.
pub(crate) fn walk(board: &Board, row: usize, col: usize, d_row: isize, d_col: isize) -> Line {
    let size = board.size() as isize;
    let (mut r, mut c) = (row as isize, col as isize);
    let mut line = Vec::new();

    while (0..size).contains(&r) && (0..size).contains(&c) {
        line.push(board.cell_at(r as usize, c as usize));
        r += d_row;
        c += d_col;
    }

    line
}

/// All rows, top to bottom, each read left to right
pub fn rows(board: &Board) -> impl Iterator<Item = Line> + '_ {
    (0..board.size()).map(move |row| walk(board, row, 0, 0, 1))
}

/// All columns, left to right, each read top to bottom
pub fn columns(board: &Board) -> impl Iterator<Item = Line> + '_ {
    (0..board.size()).map(move |col| walk(board, 0, col, 1, 0))
}

/// Start cell of the diagonal at `offset` above (`offset > 0`) or below the
/// central one, counted from the top-left corner.
fn main_start(offset: isize) -> (usize, usize) {
    if offset >= 0 {
        (0, offset as usize)
    } else {
        (offset.unsigned_abs(), 0)
    }
}

/// Every diagonal of the board, `2 * (2N - 1)` in total.
///
/// The anti-diagonal family comes first, offsets `-(N-1)..=(N-1)`, each read
/// from its bottom-left end. The main family follows, offsets `(N-1)` down to
/// `-(N-1)`, each read from its top-left end.
pub fn diagonals(board: &Board) -> Vec<Line> {
    let n = board.size() as isize;
    if n == 0 {
        return Vec::new();
    }
    let last = (n - 1) as usize;

    let anti = (-(n - 1)..n).map(|offset| {
        let (row, col) = main_start(offset);
        walk(board, last - row, col, -1, 1)
    });
    let main = (-(n - 1)..n).rev().map(|offset| {
        let (row, col) = main_start(offset);
        walk(board, row, col, 1, 1)
    });

    anti.chain(main).collect()
}

/// Diagonals long enough to hold a winning run
pub fn diagonals_at_least(board: &Board, winning_length: usize) -> Vec<Line> {
    diagonals(board)
        .into_iter()
        .filter(|diagonal| diagonal.len() >= winning_length)
        .collect()
}

/// Winner of a single line.
///
/// Groups consecutive equal cells and returns the side of the first
/// non-empty group at least `winning_length` long.
pub fn line_winner(line: &[Cell], winning_length: usize) -> Option<Side> {
    line.chunk_by(|a, b| a == b)
        .filter(|run| run.len() >= winning_length)
        .find_map(|run| run[0].side())
}

/// Winner of the board, scanning rows, then columns, then diagonals.
///
/// On a degenerate board with several winning lines the first one in that
/// order decides.
pub fn board_winner(board: &Board, winning_length: usize) -> Option<Side> {
    rows(board)
        .chain(columns(board))
        .chain(diagonals_at_least(board, winning_length))
        .find_map(|line| line_winner(&line, winning_length))
}
