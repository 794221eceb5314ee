//! Heuristic position scoring
//!
//! Scores are from player one's point of view: positive favours player one,
//! negative favours player two. The range is not normalized; only the
//! relative order of scores is meaningful.

use super::{Board, Cell, lines};

/// Line score for a completed, unblocked run of winning length
pub const DECISIVE_SCORE: i64 = 100_000;

/// Score a board for player one.
///
/// Sums [`evaluate_line`] over every row (left to right), column (top to
/// bottom), main diagonal (top-left to bottom-right) and anti diagonal
/// (top-right to bottom-left). Diagonals shorter than `winning_length` are
/// included; they can never contribute.
pub fn evaluate(board: &Board, winning_length: usize) -> i64 {
    let size = board.size();
    let rows = lines::rows(board);
    let columns = lines::columns(board);

    // Main diagonals start along the top row and the left column; anti
    // diagonals along the top row and the right column.
    let main = (0..size)
        .map(|col| (0, col))
        .chain((1..size).map(|row| (row, 0)))
        .map(|(row, col)| lines::walk(board, row, col, 1, 1));
    let anti = (0..size)
        .map(|col| (0, col))
        .chain((1..size).map(|row| (row, size - 1)))
        .map(|(row, col)| lines::walk(board, row, col, 1, -1));

    rows.chain(columns)
        .chain(main)
        .chain(anti)
        .map(|line| evaluate_line(&line, winning_length))
        .sum()
}

/// Score a single line.
///
/// Tracks the side of the current run (`last`, starting at 0), its length,
/// and the empty cells seen since the run started. A run of the opposing side
/// or the end of the line closes the current run, which scores
/// `(count - 1) * last` when it and the empties could still have made
/// `winning_length`. A run reaching `winning_length` with no empty cell seen
/// scores [`DECISIVE_SCORE`] for the whole line.
///
/// Leading empty cells count as a run of side 0, so a line opening with
/// `winning_length` empties scores 0.
pub fn evaluate_line(line: &[Cell], winning_length: usize) -> i64 {
    let mut count = 0usize;
    let mut last = 0i64;
    let mut neutrals = 0usize;
    let mut score = 0i64;

    let run_score = |count: usize, last: i64| (count as i64 - 1) * last;

    for &cell in line {
        let value = i64::from(cell.value());

        if value == last {
            count += 1;
            if count == winning_length && neutrals == 0 {
                return DECISIVE_SCORE * value;
            }
        } else if value == 0 {
            neutrals += 1;
        } else if value == -last {
            if neutrals + count >= winning_length {
                score += run_score(count, last);
            }
            count = 1;
            last = value;
            neutrals = 0;
        } else {
            count = 1;
            last = value;
        }
    }

    if neutrals + count >= winning_length {
        score += run_score(count, last);
    }

    score
}
