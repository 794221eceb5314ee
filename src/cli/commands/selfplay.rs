//! Selfplay command - Play batches of games between built-in strategies

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    analysis::OutcomeTally,
    cli::{
        config::{GameArgs, StrategyKind},
        output::{print_json, print_kv, print_section, print_tally},
    },
    config::GameConfig,
    pipeline::{MilestoneObserver, ProgressObserver, SelfPlayPipeline},
};

#[derive(Parser, Debug)]
#[command(about = "Play games between two strategies")]
pub struct SelfPlayArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Strategy for player one
    #[arg(long, value_enum, default_value = "random")]
    pub player_one: StrategyKind,

    /// Strategy for player two
    #[arg(long, value_enum, default_value = "random")]
    pub player_two: StrategyKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log a summary every this many games
    #[arg(long)]
    pub milestone: Option<usize>,

    /// Print a JSON summary instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SelfPlaySummary<'a> {
    config: GameConfig,
    player_one: &'a str,
    player_two: &'a str,
    seed: Option<u64>,
    outcomes: OutcomeTally,
    mean_outcome: f64,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let config = args.game.resolve()?;

    // Distinct seeds so seeded random players do not mirror each other.
    let mut player_one = args.player_one.build(args.seed, config.winning_length);
    let mut player_two = args
        .player_two
        .build(args.seed.map(|s| s.wrapping_add(1)), config.winning_length);

    let mut pipeline = SelfPlayPipeline::new(config);
    if !args.json {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(interval) = args.milestone {
        pipeline = pipeline.with_observer(Box::new(MilestoneObserver::new(interval)));
    }

    let tally = pipeline.run(args.games, player_one.as_mut(), player_two.as_mut())?;

    if args.json {
        return print_json(&SelfPlaySummary {
            config,
            player_one: player_one.name(),
            player_two: player_two.name(),
            seed: args.seed,
            outcomes: tally,
            mean_outcome: tally.mean_outcome(),
        });
    }

    print_section("Self-play Results");
    print_kv("Board", &format!("{0}x{0}", config.size));
    print_kv("Winning length", &config.winning_length.to_string());
    print_kv("Player one", player_one.name());
    print_kv("Player two", player_two.name());
    print_tally(&tally);
    print_kv("Mean outcome", &format!("{:+.3}", tally.mean_outcome()));

    Ok(())
}
