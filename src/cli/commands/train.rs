//! Train command - Train the tabular Q-value agent against a built-in opponent

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    analysis::OutcomeTally,
    cli::{
        config::{GameArgs, StrategyKind, parse_side_token},
        output::{format_number, print_json, print_kv, print_section, print_tally},
    },
    config::{GameConfig, TabularConfig},
    pipeline::{MilestoneObserver, ProgressObserver, SelfPlayPipeline, TrainingPipeline},
    q_learning::QLearningAgent,
    tictactoe::Side,
};

#[derive(Parser, Debug)]
#[command(about = "Train the tabular agent")]
pub struct TrainArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Opponent to train against
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: StrategyKind,

    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 5000)]
    pub games: usize,

    /// Number of greedy evaluation games after training (0 to skip)
    #[arg(long, default_value_t = 1000)]
    pub eval_games: usize,

    /// Which side the agent plays (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_side: String,

    /// Step size of each update
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Discount applied to the successor state's best value
    #[arg(long)]
    pub discount: Option<f64>,

    /// Value of every move on a state's first visit
    #[arg(long)]
    pub q_init: Option<f64>,

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

impl TrainArgs {
    fn tabular_config(&self) -> TabularConfig {
        let mut config = TabularConfig::default();
        if let Some(rate) = self.learning_rate {
            config = config.with_learning_rate(rate);
        }
        if let Some(discount) = self.discount {
            config = config.with_discount_factor(discount);
        }
        if let Some(q_init) = self.q_init {
            config = config.with_q_init(q_init);
        }
        config
    }
}

#[derive(Debug, Serialize)]
struct TrainingSummary {
    config: GameConfig,
    tabular: TabularConfig,
    agent_side: Side,
    seed: Option<u64>,
    states: usize,
    training: OutcomeTally,
    evaluation: Option<OutcomeTally>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = args.game.resolve()?;
    let agent_side = parse_side_token(&args.agent_side, "--agent-side")?;
    let tabular = args.tabular_config();

    let mut agent = QLearningAgent::new(tabular, config.winning_length);
    let mut opponent = args.opponent.build(args.seed, config.winning_length);

    let mut pipeline = TrainingPipeline::new(config).with_agent_side(agent_side);
    if !args.json {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(interval) = args.milestone {
        pipeline = pipeline.with_observer(Box::new(MilestoneObserver::new(interval)));
    }
    let training = pipeline.run(args.games, &mut agent, opponent.as_mut())?;

    // Evaluation plays greedily without learning.
    let evaluation = if args.eval_games > 0 {
        let mut opponent = args
            .opponent
            .build(args.seed.map(|s| s.wrapping_add(1)), config.winning_length);
        let mut evaluator = SelfPlayPipeline::new(config);
        let tally = match agent_side {
            Side::PlayerOne => evaluator.run(args.eval_games, &mut agent, opponent.as_mut())?,
            Side::PlayerTwo => evaluator.run(args.eval_games, opponent.as_mut(), &mut agent)?,
        };
        Some(tally)
    } else {
        None
    };

    if args.json {
        return print_json(&TrainingSummary {
            config,
            tabular,
            agent_side,
            seed: args.seed,
            states: agent.table().size(),
            training,
            evaluation,
        });
    }

    print_section("Training Results");
    print_kv("Agent side", &agent_side.to_string());
    print_kv("Opponent", opponent.name());
    print_kv("States visited", &format_number(agent.table().size() as u64));
    print_tally(&training);

    if let Some(evaluation) = evaluation {
        print_section("Evaluation Results");
        print_tally(&evaluation);
        print_kv(
            "Agent win rate",
            &format!("{:.1}%", evaluation.win_rate(agent_side) * 100.0),
        );
    }

    Ok(())
}
