//! tictactoe CLI - Batch play, training and state enumeration
//!
//! Logging is controlled with `RUST_LOG` (default `warn`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe_lab::cli::commands::{enumerate, selfplay, train};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe rules engine and strategy lab", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games between two built-in strategies
    Selfplay(selfplay::SelfPlayArgs),

    /// Train the tabular agent and evaluate it
    Train(Box<train::TrainArgs>),

    /// Enumerate reachable states and game outcomes
    Enumerate(enumerate::EnumerateArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Selfplay(args) => selfplay::execute(args),
        Commands::Train(args) => train::execute(*args),
        Commands::Enumerate(args) => enumerate::execute(args),
    }
}
