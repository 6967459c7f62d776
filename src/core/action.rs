//! Player actions and their outcomes.
//!
//! Every operation the presentation layer can trigger is an `Action`.
//! Applying one yields an `ActionOutcome`; the session records each
//! applied action as an `ActionRecord` so a game can be replayed from its
//! seed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::CardId;

/// A player-triggered operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select or deselect a displayed card.
    Toggle(CardId),
    /// Evaluate a complete selection.
    Resolve,
    /// Drop match/mismatch feedback and the selection.
    ClearFeedback,
    /// Deal more cards onto the display.
    Deal,
    /// Re-randomize the deck.
    Shuffle,
    /// Mark up to this many cards of an available set.
    Hint(usize),
    /// Remove hint marks.
    ClearHint,
    /// Start a new game.
    Restart,
}

/// Result of `resolve_if_complete`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOutcome {
    /// The three selected cards formed a set.
    pub matched: bool,

    /// Cards taken off the display (empty unless `matched`).
    pub removed_card_ids: SmallVec<[CardId; 3]>,
}

impl ResolveOutcome {
    /// Nothing was resolved.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// What applying an action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The action had no effect (stale card, empty deck, no selection).
    Ignored,
    /// State changed with nothing further to report.
    Applied,
    /// A three-card selection was evaluated.
    Resolved(ResolveOutcome),
    /// Cards were dealt.
    Dealt {
        /// How many cards moved onto the display.
        count: usize,
        /// A set was already showing, so the deal cost points.
        penalized: bool,
    },
    /// A hint was shown for this set.
    Hinted([CardId; 3]),
}

impl ActionOutcome {
    /// Did the action change anything?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, ActionOutcome::Ignored)
    }
}

/// A recorded action for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Position in the session log (starts at 0, never reset).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, sequence: u32) -> Self {
        Self { action, sequence }
    }
}
