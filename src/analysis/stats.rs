//! Outcome counting

use std::{fmt, ops::AddAssign};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Side};

/// Distribution of game outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub player_one_wins: u64,
    pub player_two_wins: u64,
    pub draws: u64,
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Side::PlayerOne) => self.player_one_wins += 1,
            GameOutcome::Win(Side::PlayerTwo) => self.player_two_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Record a game by its winner, `None` being a draw
    pub fn record_winner(&mut self, winner: Option<Side>) {
        self.record(winner.map_or(GameOutcome::Draw, GameOutcome::Win));
    }

    pub fn total(&self) -> u64 {
        self.player_one_wins + self.player_two_wins + self.draws
    }

    pub fn wins(&self, side: Side) -> u64 {
        match side {
            Side::PlayerOne => self.player_one_wins,
            Side::PlayerTwo => self.player_two_wins,
        }
    }

    /// Fraction of games won by `side`, 0 for an empty tally
    pub fn win_rate(&self, side: Side) -> f64 {
        self.fraction(self.wins(side))
    }

    pub fn draw_rate(&self) -> f64 {
        self.fraction(self.draws)
    }

    /// Average outcome with wins counted +1 for player one and -1 for
    /// player two, 0 for an empty tally
    pub fn mean_outcome(&self) -> f64 {
        self.fraction(self.player_one_wins) - self.fraction(self.player_two_wins)
    }

    fn fraction(&self, count: u64) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }
}

impl AddAssign for OutcomeTally {
    fn add_assign(&mut self, other: Self) {
        self.player_one_wins += other.player_one_wins;
        self.player_two_wins += other.player_two_wins;
        self.draws += other.draws;
    }
}

impl fmt::Display for OutcomeTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P1:{} P2:{} D:{}",
            self.player_one_wins, self.player_two_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_rates() {
        let mut tally = OutcomeTally::new();
        tally.record(GameOutcome::Win(Side::PlayerOne));
        tally.record(GameOutcome::Win(Side::PlayerOne));
        tally.record_winner(Some(Side::PlayerTwo));
        tally.record_winner(None);

        assert_eq!(tally.total(), 4);
        assert_eq!(tally.wins(Side::PlayerOne), 2);
        assert_eq!(tally.win_rate(Side::PlayerTwo), 0.25);
        assert_eq!(tally.draw_rate(), 0.25);
        assert_eq!(tally.mean_outcome(), 0.25);
        assert_eq!(tally.to_string(), "P1:2 P2:1 D:1");
    }

    #[test]
    fn test_empty_tally_rates_are_zero() {
        let tally = OutcomeTally::new();
        assert_eq!(tally.win_rate(Side::PlayerOne), 0.0);
        assert_eq!(tally.mean_outcome(), 0.0);
    }

    #[test]
    fn test_add_assign_merges() {
        let mut a = OutcomeTally {
            player_one_wins: 1,
            player_two_wins: 2,
            draws: 3,
        };
        a += OutcomeTally {
            player_one_wins: 10,
            player_two_wins: 20,
            draws: 30,
        };
        assert_eq!(a.total(), 66);
        assert_eq!(a.draws, 33);
    }
}
