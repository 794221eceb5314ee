//! Shared argument types for CLI commands

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, ValueEnum};

use crate::{
    config::GameConfig,
    players::{HeuristicStrategy, RandomStrategy},
    ports::Strategy,
    tictactoe::Side,
};

/// Board options common to every command
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// JSON file with `size` and `winning_length`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Board size, overriding the config file
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Marks in a row needed to win, overriding the config file
    #[arg(long, short = 'w')]
    pub winning_length: Option<usize>,
}

impl GameArgs {
    /// Build the game configuration from the config file and flag overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                GameConfig::from_json(&text)
                    .with_context(|| format!("invalid config in {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(winning_length) = self.winning_length {
            config = config.with_winning_length(winning_length);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Built-in strategies selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Heuristic,
}

impl StrategyKind {
    /// Instantiate the strategy; random players are seeded when `seed` is set
    pub fn build(self, seed: Option<u64>, winning_length: usize) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::with_seed(seed)),
                None => Box::new(RandomStrategy::new()),
            },
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(winning_length)),
        }
    }
}

pub(crate) fn parse_side_token(value: &str, flag: &str) -> Result<Side> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Side::PlayerOne),
        "o" | "second" | "player2" | "p2" => Ok(Side::PlayerTwo),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
