//! Self-play between two fixed strategies

use tracing::{info, instrument};

use crate::{
    Result,
    analysis::OutcomeTally,
    config::GameConfig,
    ports::{Observer, Strategy},
    tictactoe::run_game,
};

/// Plays a batch of games and tallies the outcomes
pub struct SelfPlayPipeline {
    config: GameConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl SelfPlayPipeline {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play `games` games, `player_one` always moving first.
    ///
    /// # Errors
    ///
    /// Stops at the first strategy or observer error.
    #[instrument(skip(self, player_one, player_two), fields(size = self.config.size))]
    pub fn run(
        &mut self,
        games: usize,
        player_one: &mut dyn Strategy,
        player_two: &mut dyn Strategy,
    ) -> Result<OutcomeTally> {
        self.config.validate()?;
        for observer in &mut self.observers {
            observer.on_run_start(games)?;
        }

        let mut tally = OutcomeTally::new();
        for game_num in 1..=games {
            let game = run_game(self.config, &mut *player_one, &mut *player_two)?;
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
            player_one = player_one.name(),
            player_two = player_two.name(),
            %tally,
            "self-play finished"
        );
        Ok(tally)
    }
}

/// Play `games` games between two strategies without observers
pub fn run_games(
    config: GameConfig,
    games: usize,
    player_one: &mut dyn Strategy,
    player_two: &mut dyn Strategy,
) -> Result<OutcomeTally> {
    SelfPlayPipeline::new(config).run(games, player_one, player_two)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{HeuristicStrategy, RandomStrategy};

    #[test]
    fn test_tally_counts_every_game() {
        let mut pipeline = SelfPlayPipeline::new(GameConfig::default());
        let mut one = RandomStrategy::with_seed(1);
        let mut two = RandomStrategy::with_seed(2);

        let tally = pipeline.run(200, &mut one, &mut two).unwrap();
        assert_eq!(tally.total(), 200);
    }

    #[test]
    fn test_run_games_rejects_bad_config() {
        let config = GameConfig::default().with_winning_length(4);
        let mut one = RandomStrategy::with_seed(1);
        let mut two = RandomStrategy::with_seed(2);

        assert!(matches!(
            run_games(config, 1, &mut one, &mut two),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_deterministic_players_repeat() {
        let mut pipeline = SelfPlayPipeline::new(GameConfig::default());
        let mut one = HeuristicStrategy::new(3);
        let mut two = HeuristicStrategy::new(3);

        let tally = pipeline.run(3, &mut one, &mut two).unwrap();
        assert!(
            [tally.player_one_wins, tally.player_two_wins, tally.draws].contains(&3),
            "identical games should share one outcome: {tally}"
        );
    }
}
