//! Statistics over batches of games

pub mod stats;

pub use stats::OutcomeTally;
