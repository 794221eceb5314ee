//! Observer implementations for the pipelines

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::{Error, Result, analysis::OutcomeTally, ports::Observer, tictactoe::GameOutcome};

/// Progress observer - Shows a progress bar with running outcome counts
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: OutcomeTally,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: OutcomeTally::new(),
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        self.tally = OutcomeTally::new();
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.tally.to_string());
        }
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally.to_string());
        }
        Ok(())
    }
}

/// Milestone observer - Logs the outcomes of each window of games
pub struct MilestoneObserver {
    interval: usize,
    window: OutcomeTally,
}

impl MilestoneObserver {
    /// Log every `interval` games; an interval of 0 is treated as 1
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            window: OutcomeTally::new(),
        }
    }
}

impl Observer for MilestoneObserver {
    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.window.record(outcome);
        if game_num % self.interval == 0 {
            info!(
                game = game_num,
                tally = %self.window,
                mean_outcome = self.window.mean_outcome(),
                "milestone"
            );
            self.window = OutcomeTally::new();
        }
        Ok(())
    }
}
