//! Batch play and training pipelines
//!
//! - [`SelfPlayPipeline`]: many independent games between two strategies
//! - [`TrainingPipeline`]: a tabular agent learning against an opponent
//! - Observers for progress bars and periodic log summaries

pub mod observers;
pub mod selfplay;
pub mod training;

pub use observers::{MilestoneObserver, ProgressObserver};
pub use selfplay::{SelfPlayPipeline, run_games};
pub use training::{TrainingPipeline, train_tabular};

pub use crate::ports::{Observer, Strategy};
