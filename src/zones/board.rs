//! Board: card locations and movement.
//!
//! The `Board` owns every card of the current game and keeps them in two
//! ordered zones:
//! - the **deck** (face down; index 0 is the next card dealt)
//! - the **display** (face up, in layout order)
//!
//! Matched cards leave the board entirely; only their count is kept so
//! the partition `deck + displayed + removed = 81` can be checked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, MatchState, DECK_SIZE};
use crate::core::entity::CardId;
use crate::core::rng::GameRng;

/// Which zone a card is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Displayed,
}

/// Deck and display of one game.
///
/// ```
/// use set_game::zones::Board;
/// use set_game::cards::new_deck;
/// use set_game::core::{GameRng, IdAllocator};
///
/// let deck = new_deck(&mut GameRng::new(1), &mut IdAllocator::new());
/// let board = Board::deal_initial(deck, 12);
///
/// assert_eq!(board.deck_count(), 69);
/// assert_eq!(board.displayed().len(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    deck: Vec<Card>,
    displayed: Vec<Card>,
    removed: usize,
}

impl Board {
    /// Lay out the first `initial_display` cards of a full deck.
    ///
    /// Panics if `deck` is not a complete deck; that can only happen if
    /// the caller built it by hand.
    #[must_use]
    pub fn deal_initial(mut deck: Vec<Card>, initial_display: usize) -> Self {
        assert_eq!(deck.len(), DECK_SIZE, "a game starts from a full {DECK_SIZE}-card deck");
        assert!(
            initial_display <= deck.len(),
            "cannot display {initial_display} cards from a {}-card deck",
            deck.len()
        );

        let displayed = deck.drain(..initial_display).collect();
        Self {
            deck,
            displayed,
            removed: 0,
        }
    }

    /// Build a board from explicit zones.
    ///
    /// Used for hand-made positions; the partition is checked against the
    /// cards given rather than against a full deck.
    #[must_use]
    pub fn from_parts(deck: Vec<Card>, displayed: Vec<Card>, removed: usize) -> Self {
        Self {
            deck,
            displayed,
            removed,
        }
    }

    // === Queries ===

    /// Face-down cards, next card first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Face-up cards in layout order.
    #[must_use]
    pub fn displayed(&self) -> &[Card] {
        &self.displayed
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    /// Cards cleared by confirmed matches.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed
    }

    /// Every card the board has accounted for.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.displayed.len() + self.removed
    }

    /// Zone of a card, or `None` if it is not on the board.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        if self.position(id).is_some() {
            Some(Zone::Displayed)
        } else if self.deck.iter().any(|c| c.id == id) {
            Some(Zone::Deck)
        } else {
            None
        }
    }

    /// Index of a displayed card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.displayed.iter().position(|c| c.id == id)
    }

    /// A displayed card by ID, mutably.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.displayed.iter_mut().find(|c| c.id == id)
    }

    /// Displayed cards in a given state, in layout order.
    pub fn cards_in_state(&self, state: MatchState) -> impl Iterator<Item = &Card> + '_ {
        self.displayed.iter().filter(move |c| c.match_state == state)
    }

    /// IDs of the current selection, in layout order.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[CardId; 3]> {
        self.cards_in_state(MatchState::Selected).map(|c| c.id).collect()
    }

    // === Movement ===

    /// Move up to `count` cards from the front of the deck to the end of
    /// the display. Returns how many moved.
    pub fn draw(&mut self, count: usize) -> usize {
        let n = count.min(self.deck.len());
        self.displayed.extend(self.deck.drain(..n).map(|mut card| {
            card.match_state = MatchState::Unselected;
            card
        }));
        n
    }

    /// Take displayed cards off the board for good.
    ///
    /// IDs not on display are skipped. Returns the removed cards in
    /// layout order.
    pub fn remove(&mut self, ids: &[CardId]) -> SmallVec<[Card; 3]> {
        let mut taken = SmallVec::new();
        self.displayed.retain(|card| {
            if ids.contains(&card.id) {
                taken.push(*card);
                false
            } else {
                true
            }
        });
        self.removed += taken.len();
        taken
    }

    /// Set every displayed card matching `predicate` to `state`.
    ///
    /// Returns how many cards changed.
    pub fn set_state_where(
        &mut self,
        predicate: impl Fn(&Card) -> bool,
        state: MatchState,
    ) -> usize {
        let mut changed = 0;
        for card in self.displayed.iter_mut().filter(|c| predicate(c)) {
            if card.match_state != state {
                card.match_state = state;
                changed += 1;
            }
        }
        changed
    }

    /// Re-randomize the deck order. The display is untouched.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }
}
