//! Training pipeline for the tabular agent

use tracing::{info, instrument};

use crate::{
    Result,
    analysis::OutcomeTally,
    config::GameConfig,
    ports::{Observer, Strategy},
    q_learning::QLearningAgent,
    tictactoe::{Game, Side},
};

/// Trains a [`QLearningAgent`] by playing it against an opponent.
///
/// The agent learns from each of its own moves as it makes them.
pub struct TrainingPipeline {
    config: GameConfig,
    agent_side: Side,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a pipeline with the agent playing first
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            agent_side: Side::PlayerOne,
            observers: Vec::new(),
        }
    }

    /// Set which side the agent plays
    pub fn with_agent_side(mut self, side: Side) -> Self {
        self.agent_side = side;
        self
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play `games` training games and tally their outcomes.
    ///
    /// # Errors
    ///
    /// Stops at the first strategy, learning or observer error.
    #[instrument(skip(self, agent, opponent), fields(agent_side = %self.agent_side))]
    pub fn run(
        &mut self,
        games: usize,
        agent: &mut QLearningAgent,
        opponent: &mut dyn Strategy,
    ) -> Result<OutcomeTally> {
        self.config.validate()?;
        for observer in &mut self.observers {
            observer.on_run_start(games)?;
        }

        let mut tally = OutcomeTally::new();
        for game_num in 1..=games {
            let mut game = Game::new(self.config);

            while !game.is_terminal() {
                let side = game.to_move();
                let position = if side == self.agent_side {
                    let position = agent.select_move(game.board(), side)?;
                    agent.learn(game.board(), position, side)?;
                    position
                } else {
                    opponent.select_move(game.board(), side)?
                };
                game.play(position)?;
            }

            if let Some(outcome) = game.outcome() {
                tally.record(outcome);
                for observer in &mut self.observers {
                    observer.on_game_end(game_num, outcome)?;
                }
            }
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        info!(
            states = agent.table().size(),
            %tally,
            "training finished"
        );
        Ok(tally)
    }
}

/// Train `agent` on `agent_side` for `games` games without observers
pub fn train_tabular(
    agent: &mut QLearningAgent,
    agent_side: Side,
    opponent: &mut dyn Strategy,
    config: GameConfig,
    games: usize,
) -> Result<OutcomeTally> {
    TrainingPipeline::new(config)
        .with_agent_side(agent_side)
        .run(games, agent, opponent)
}
