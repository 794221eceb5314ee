//! Tic-tac-toe board engine, game driver and state enumeration

pub mod board;
pub mod evaluation;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{Board, Cell, Side};
pub use evaluation::{DECISIVE_SCORE, evaluate, evaluate_line};
pub use game::{Game, GameOutcome, GameStatus, Move, play_game, run_game};
pub use game_tree::{Sample, is_terminal, outcome_counts, reachable_states, regression_dataset};
pub use lines::{Line, board_winner, columns, diagonals, diagonals_at_least, line_winner, rows};
