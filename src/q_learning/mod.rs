//! Tabular Q-value player
//!
//! The table maps a board's canonical [`crate::types::StateKey`] to a value
//! estimate for each move available in that state. States are added lazily
//! the first time they are seen, every move starting at
//! [`crate::config::TabularConfig::q_init`]. A high initial value makes the
//! greedy player try untested moves before settling on known ones.
//!
//! ## Update
//!
//! After choosing `a` in state `s` and reaching `s'`:
//!
//! ```text
//! target = r                          if s' is terminal
//! target = r + γ · max_a' Q(s', a')   otherwise
//! Q(s, a) ← Q(s, a) + α · (target − Q(s, a))
//! ```
//!
//! where `r` is +1 when the move wins for the agent and 0 otherwise.
//!
//! ## Usage Example
//!
//! ```
//! use tictactoe_lab::{
//!     config::TabularConfig,
//!     ports::Strategy,
//!     q_learning::QLearningAgent,
//!     tictactoe::{Board, Side},
//! };
//!
//! let mut agent = QLearningAgent::new(TabularConfig::default(), 3);
//! let board = Board::new(3);
//! let position = agent.select_move(&board, Side::PlayerOne)?;
//! agent.learn(&board, position, Side::PlayerOne)?;
//! assert_eq!(agent.table().size(), 2);
//! # Ok::<(), tictactoe_lab::Error>(())
//! ```

pub mod agent;
pub mod q_table;

pub use agent::QLearningAgent;
pub use q_table::QTable;
