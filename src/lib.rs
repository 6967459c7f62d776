//! # set-game
//!
//! Rules engine for the SET card game.
//!
//! ## Design Principles
//!
//! 1. **One owner**: A session owns a single `GameState`. No globals,
//!    no interior mutability, no timers.
//!
//! 2. **Two-phase resolution**: `resolve_if_complete` updates score and
//!    board at once; `clear_feedback` drops the visual states whenever the
//!    caller decides.
//!
//! 3. **Deterministic**: Same seed and same actions give the same game.
//!    Every applied action is logged for replay.
//!
//! ## Modules
//!
//! - `core`: Card IDs, state, actions, RNG, configuration
//! - `cards`: Attributes, cards, deck construction
//! - `zones`: The board (deck + display)
//! - `rules`: Set validation, set search, `RulesEngine` trait
//! - `games`: The standard game and its session handle

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardId, IdAllocator,
    GameRng, GameRngState,
    ConfigError, GameConfig,
    Action, ActionOutcome, ActionRecord, ResolveOutcome,
    EngineState, GameState,
};

pub use crate::cards::{
    Attribute, Card, Color, Features, MatchState, Number, Shading, Shape, DECK_SIZE,
};

pub use crate::zones::{Board, Zone};

pub use crate::rules::{
    count_sets, find_all_sets, find_set, is_valid_set, set_is_available, GameResult, RulesEngine,
};

pub use crate::games::standard::{SetGame, StandardRules};
