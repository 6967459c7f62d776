//! The standard single-player SET game.
//!
//! - 81-card deck, 12 cards on display
//! - Select three cards; a valid set scores and leaves the board
//! - Deal three more on request, at a cost if a set was already showing
//! - Hints mark part of the first set found
//!
//! `StandardRules` holds the rules; `SetGame` is the session a
//! presentation layer drives.

mod rules;
mod session;

pub use rules::StandardRules;
pub use session::SetGame;
