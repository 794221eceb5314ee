//! Command implementations

pub mod enumerate;
pub mod selfplay;
pub mod train;
