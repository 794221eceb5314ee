//! CLI infrastructure for the `tictactoe` binary
//!
//! Commands for batch self-play, tabular training and state enumeration.

pub mod commands;
pub mod config;
pub mod output;
