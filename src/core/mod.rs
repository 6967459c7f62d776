//! Core engine types: card identity, state, actions, RNG, configuration.
//!
//! Everything the rules operate on lives here. A session owns exactly one
//! `GameState`; the presentation layer only ever sees `EngineState`
//! snapshots.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{CardId, IdAllocator};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, GameConfig};
pub use action::{Action, ActionOutcome, ActionRecord, ResolveOutcome};
pub use state::{EngineState, GameState};
