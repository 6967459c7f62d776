//! Rules engine trait.
//!
//! A rules implementation defines:
//! - What actions are legal in a state
//! - How actions modify state
//! - When the game is over

use serde::{Deserialize, Serialize};

use crate::core::action::{Action, ActionOutcome};
use crate::core::config::GameConfig;
use crate::core::state::GameState;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Score when the game ended.
    pub final_score: i64,

    /// Sets confirmed during the game.
    pub sets_found: u32,

    /// Face-up cards left with no set among them.
    pub cards_left: usize,
}

impl GameResult {
    /// Every card was cleared.
    #[must_use]
    pub fn is_clean_sweep(&self) -> bool {
        self.cards_left == 0
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Actions that would change state right now
/// - `apply_action`: Must be deterministic for replay
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Actions that would have an effect in `state`.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> ActionOutcome;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}
