//! Enumerate command - Count reachable states and complete games

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    analysis::OutcomeTally,
    cli::{
        config::{GameArgs, parse_side_token},
        output::{format_number, print_json, print_kv, print_section, print_tally},
    },
    config::GameConfig,
    tictactoe::{
        Board, Side, is_terminal, outcome_counts, reachable_states, regression_dataset,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Enumerate reachable states and game outcomes")]
pub struct EnumerateArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Which side moves first (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,

    /// Print the regression dataset as JSON instead of a summary
    #[arg(long)]
    pub dataset: bool,

    /// Print a JSON summary instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EnumerationSummary {
    config: GameConfig,
    first: Side,
    states: usize,
    terminal_states: usize,
    games: OutcomeTally,
}

pub fn execute(args: EnumerateArgs) -> Result<()> {
    let config = args.game.resolve()?;
    let first = parse_side_token(&args.first, "--first")?;

    if args.dataset {
        return print_json(&regression_dataset(config, first)?);
    }

    let root = Board::new(config.size);
    let states = reachable_states(&root, first, config.winning_length);
    let terminal_states = states
        .iter()
        .filter(|(board, _)| is_terminal(board, config.winning_length))
        .count();
    let games = outcome_counts(&root, first, config.winning_length);

    let summary = EnumerationSummary {
        config,
        first,
        states: states.len(),
        terminal_states,
        games,
    };

    if args.json {
        return print_json(&summary);
    }

    print_section("State Enumeration");
    print_kv("Board", &format!("{0}x{0}", config.size));
    print_kv("Winning length", &config.winning_length.to_string());
    print_kv("Reachable states", &format_number(summary.states as u64));
    print_kv(
        "Terminal states",
        &format_number(summary.terminal_states as u64),
    );
    print_tally(&summary.games);

    Ok(())
}
