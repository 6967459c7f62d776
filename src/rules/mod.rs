//! Game rules: set validation, set search, and the rules engine trait.
//!
//! Validation and search are pure functions over cards. `RulesEngine`
//! ties them to `GameState` for the game implementations in `games`.

pub mod engine;
pub mod search;
pub mod validation;

pub use engine::{GameResult, RulesEngine};
pub use search::{count_sets, find_all_sets, find_set, find_set_indices, set_is_available};
pub use validation::{is_valid_features, is_valid_set, third_card_features};
