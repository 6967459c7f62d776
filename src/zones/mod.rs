//! Card locations for one game.
//!
//! ## Key Types
//!
//! - `Board`: the deck and the display, plus the count of cleared cards
//! - `Zone`: which of the two a card is in

pub mod board;

pub use board::{Board, Zone};
