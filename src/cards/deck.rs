//! Deck construction.
//!
//! The deck is the Cartesian product of the four attribute axes: 81
//! cards, each feature combination exactly once.

use super::attributes::{Attribute, Color, Features, Number, Shading, Shape};
use super::instance::Card;
use crate::core::entity::IdAllocator;
use crate::core::rng::GameRng;

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 81;

/// Every feature combination in number-major order.
pub fn all_features() -> impl Iterator<Item = Features> {
    Number::ALL.into_iter().flat_map(|number| {
        Shape::ALL.into_iter().flat_map(move |shape| {
            Shading::ALL.into_iter().flat_map(move |shading| {
                Color::ALL
                    .into_iter()
                    .map(move |color| Features::new(number, shape, shading, color))
            })
        })
    })
}

/// Unshuffled deck with fresh IDs.
pub fn full_deck(ids: &mut IdAllocator) -> Vec<Card> {
    let deck: Vec<Card> = all_features().map(|f| Card::new(ids.alloc(), f)).collect();
    assert_eq!(deck.len(), DECK_SIZE, "deck must hold every combination exactly once");
    deck
}

/// Shuffled deck with fresh IDs.
///
/// ```
/// use set_game::cards::{new_deck, DECK_SIZE};
/// use set_game::core::{GameRng, IdAllocator};
///
/// let mut rng = GameRng::new(7);
/// let mut ids = IdAllocator::new();
/// let deck = new_deck(&mut rng, &mut ids);
///
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
pub fn new_deck(rng: &mut GameRng, ids: &mut IdAllocator) -> Vec<Card> {
    let mut deck = full_deck(ids);
    rng.shuffle(&mut deck);
    deck
}
