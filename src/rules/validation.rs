//! Set validation.
//!
//! Three cards form a set when, for each of the four attributes, their
//! values are all the same or all different. Two-of-a-kind on any
//! attribute breaks the set.

use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::cards::{Card, Features};

/// `true` if the values are uniform or pairwise distinct.
fn uniform_or_distinct<T: Eq + Hash>(values: impl IntoIterator<Item = T>) -> bool {
    let distinct: FxHashSet<T> = values.into_iter().collect();
    distinct.len() == 1 || distinct.len() == 3
}

/// Check whether three feature combinations form a set.
#[must_use]
pub fn is_valid_features(triple: [Features; 3]) -> bool {
    uniform_or_distinct(triple.iter().map(|f| f.number))
        && uniform_or_distinct(triple.iter().map(|f| f.shape))
        && uniform_or_distinct(triple.iter().map(|f| f.shading))
        && uniform_or_distinct(triple.iter().map(|f| f.color))
}

/// Check whether the given cards form a set.
///
/// Any count other than three is simply not a set.
///
/// ```
/// use set_game::cards::{Card, Color, Features, Number, Shading, Shape};
/// use set_game::core::CardId;
/// use set_game::rules::is_valid_set;
///
/// let card = |id, n| Card::new(CardId(id), Features::new(n, Shape::Diamond, Shading::Solid, Color::Red));
/// let cards = [card(0, Number::One), card(1, Number::Two), card(2, Number::Three)];
///
/// assert!(is_valid_set(&cards));
/// assert!(!is_valid_set(&cards[..2]));
/// ```
#[must_use]
pub fn is_valid_set(cards: &[Card]) -> bool {
    match cards {
        [a, b, c] => is_valid_features([a.features, b.features, c.features]),
        _ => false,
    }
}

/// Features of the one card that completes a set with `a` and `b`.
#[must_use]
pub fn third_card_features(a: &Card, b: &Card) -> Features {
    a.features.complete(b.features)
}
