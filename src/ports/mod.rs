//! Ports (trait boundaries) between the game engine and its players.
//!
//! The engine owns these traits; players and pipeline observers implement
//! them.

pub mod observer;
pub mod strategy;

pub use observer::Observer;
pub use strategy::Strategy;
