//! Card instances - identity, attributes, and display state.
//!
//! A `Card` pairs an immutable identity and feature combination with the
//! one piece of mutable state the rules care about: its `MatchState`.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Features, Number, Shading, Shape};
use crate::core::entity::CardId;

/// Display state of a face-up card.
///
/// `Selected` is the only state the player toggles. `Matched` and
/// `Mismatched` are feedback states set by match resolution and cleared
/// by `clear_feedback`. `Hinted` is set by the hint search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    #[default]
    Unselected,
    Selected,
    Matched,
    Mismatched,
    Hinted,
}

impl MatchState {
    /// Feedback states owned by match resolution.
    #[must_use]
    pub fn is_feedback(self) -> bool {
        matches!(self, MatchState::Matched | MatchState::Mismatched)
    }

    /// States reset by `clear_feedback`.
    #[must_use]
    pub fn is_cleared_by_feedback(self) -> bool {
        matches!(
            self,
            MatchState::Selected | MatchState::Matched | MatchState::Mismatched
        )
    }
}

/// A card in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique for the lifetime of the session.
    pub id: CardId,

    /// Attribute values.
    pub features: Features,

    /// Current display state.
    pub match_state: MatchState,
}

impl Card {
    /// Create an unselected card.
    #[must_use]
    pub fn new(id: CardId, features: Features) -> Self {
        Self {
            id,
            features,
            match_state: MatchState::Unselected,
        }
    }

    #[must_use]
    pub fn number(&self) -> Number {
        self.features.number
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.features.shape
    }

    #[must_use]
    pub fn shading(&self) -> Shading {
        self.features.shading
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.features.color
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.match_state == MatchState::Selected
    }

    /// Flip between `Selected` and `Unselected`.
    ///
    /// Any state other than `Selected` becomes `Selected`; callers keep
    /// feedback states away from this.
    pub fn toggle(&mut self) {
        self.match_state = if self.is_selected() {
            MatchState::Unselected
        } else {
            MatchState::Selected
        };
    }
}
