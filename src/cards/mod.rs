//! Card system: attributes, instances, and deck construction.
//!
//! ## Key Types
//!
//! - `Number`, `Shape`, `Shading`, `Color`: the four 3-valued axes
//! - `Features`: one value per axis
//! - `Card`: a dealt card (ID + features + `MatchState`)
//! - `new_deck`: the shuffled 81-card deck

pub mod attributes;
pub mod deck;
pub mod instance;

pub use attributes::{Attribute, Color, Features, Number, Shading, Shape};
pub use deck::{all_features, full_deck, new_deck, DECK_SIZE};
pub use instance::{Card, MatchState};
