//! Tic-tac-toe rules and evaluation engine
//!
//! This crate provides:
//! - An N x N board with configurable winning length, win/draw detection and
//!   a heuristic position evaluator
//! - A game driver that plays two strategies against each other
//! - Random, heuristic, scored and tabular Q-value strategies
//! - Exhaustive state enumeration for building regression datasets
//! - Self-play and training pipelines with outcome statistics

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod players;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, GameOutcome, Side, play_game};
pub use types::{Position, StateKey};
