//! Uniform random baseline

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Side},
    types::Position,
};

/// Picks uniformly among the available moves
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random player seeded from the thread RNG
    pub fn new() -> Self {
        Self {
            name: "random".to_string(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a random player with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            name: "random".to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, _side: Side) -> Result<Position> {
        board
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_legal_moves() {
        let mut player = RandomStrategy::with_seed(7);
        let board = Board::from_values(&[1, 0, -1, 0, 1, 0, -1, 1, -1]).unwrap();
        let legal = board.available_moves();

        for _ in 0..100 {
            let position = player.select_move(&board, Side::PlayerTwo).unwrap();
            assert!(legal.contains(&position), "{position} is not legal");
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new(4);
        let mut a = RandomStrategy::with_seed(42);
        let mut b = RandomStrategy::with_seed(42);

        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Side::PlayerOne).unwrap(),
                b.select_move(&board, Side::PlayerOne).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_values(&[1, -1, 1, -1]).unwrap();
        let mut player = RandomStrategy::with_seed(1);
        assert!(matches!(
            player.select_move(&board, Side::PlayerOne),
            Err(Error::NoValidMoves)
        ));
    }
}
