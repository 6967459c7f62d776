//! Game configuration.
//!
//! `GameConfig` fixes the tunable numbers of a session: how many cards are
//! laid out at the start, how many a deal adds, and the scoring constants.
//! The defaults are the standard rules (12 on display, deals of 3, +3 per
//! set, -3 for dealing while a set is showing).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::DECK_SIZE;

/// Cards laid out at the start of a game.
pub const DEFAULT_INITIAL_DISPLAY: usize = 12;

/// Cards added by a single deal.
pub const DEFAULT_DEAL_SIZE: usize = 3;

/// Points awarded for a confirmed set.
pub const DEFAULT_SET_REWARD: i64 = 3;

/// Points deducted for dealing while a set is already on display.
pub const DEFAULT_DEAL_PENALTY: i64 = 3;

/// Invalid configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial display of {requested} cards exceeds the {}-card deck", DECK_SIZE)]
    DisplayExceedsDeck { requested: usize },
    #[error("deal size must be at least 1")]
    ZeroDealSize,
    #[error("set reward must not be negative (got {0})")]
    NegativeReward(i64),
    #[error("deal penalty must not be negative (got {0})")]
    NegativePenalty(i64),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards moved from the deck to the display when a game starts.
    pub initial_display: usize,

    /// Cards moved by one `deal`.
    pub deal_size: usize,

    /// Score increment for a valid set.
    pub set_reward: i64,

    /// Score decrement for dealing while a set is available.
    pub deal_penalty: i64,

    /// Score at the start of every game.
    pub initial_score: i64,

    /// Deal replacement cards after a match when the display falls below
    /// `initial_display`.
    pub refill_after_match: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_display: DEFAULT_INITIAL_DISPLAY,
            deal_size: DEFAULT_DEAL_SIZE,
            set_reward: DEFAULT_SET_REWARD,
            deal_penalty: DEFAULT_DEAL_PENALTY,
            initial_score: 0,
            refill_after_match: false,
        }
    }
}

impl GameConfig {
    /// Standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_display(mut self, count: usize) -> Self {
        self.initial_display = count;
        self
    }

    #[must_use]
    pub fn with_deal_size(mut self, count: usize) -> Self {
        self.deal_size = count;
        self
    }

    #[must_use]
    pub fn with_set_reward(mut self, reward: i64) -> Self {
        self.set_reward = reward;
        self
    }

    #[must_use]
    pub fn with_deal_penalty(mut self, penalty: i64) -> Self {
        self.deal_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_initial_score(mut self, score: i64) -> Self {
        self.initial_score = score;
        self
    }

    /// Refill the display after each match.
    #[must_use]
    pub fn refill_after_match(mut self) -> Self {
        self.refill_after_match = true;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_display > DECK_SIZE {
            return Err(ConfigError::DisplayExceedsDeck {
                requested: self.initial_display,
            });
        }
        if self.deal_size == 0 {
            return Err(ConfigError::ZeroDealSize);
        }
        if self.set_reward < 0 {
            return Err(ConfigError::NegativeReward(self.set_reward));
        }
        if self.deal_penalty < 0 {
            return Err(ConfigError::NegativePenalty(self.deal_penalty));
        }
        Ok(())
    }
}
