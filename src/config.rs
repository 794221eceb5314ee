//! Configuration types for games and tabular players.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Board size and winning length for a game.
///
/// # Examples
///
/// ```
/// use tictactoe_lab::config::GameConfig;
///
/// let config = GameConfig::new(5, 4)?;
/// assert_eq!(config.size, 5);
/// # Ok::<(), tictactoe_lab::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of a side of the square board
    pub size: usize,
    /// Consecutive marks needed to win
    pub winning_length: usize,
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless
    /// `1 <= winning_length <= size`.
    pub fn new(size: usize, winning_length: usize) -> Result<Self> {
        let config = Self {
            size,
            winning_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration such as
    /// `{"size": 4, "winning_length": 3}`. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] for malformed JSON and
    /// [`Error::InvalidConfiguration`] for out-of-range values.
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_winning_length(mut self, winning_length: usize) -> Self {
        self.winning_length = winning_length;
        self
    }

    /// Check the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] describing the violated bound.
    pub fn validate(&self) -> Result<()> {
        if self.winning_length == 0 {
            return Err(Error::InvalidConfiguration {
                message: "winning length must be at least 1".to_string(),
            });
        }
        if self.size < self.winning_length {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board size {} is smaller than winning length {}",
                    self.size, self.winning_length
                ),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            winning_length: 3,
        }
    }
}

/// Parameters of the tabular Q-value player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabularConfig {
    /// Step size α of each update
    pub learning_rate: f64,
    /// Discount γ applied to the successor state's best value
    pub discount_factor: f64,
    /// Value given to every move of a state on its first visit
    pub q_init: f64,
}

impl TabularConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_q_init(mut self, q_init: f64) -> Self {
        self.q_init = q_init;
        self
    }
}

impl Default for TabularConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.3,
            discount_factor: 0.9,
            q_init: 1.0,
        }
    }
}
