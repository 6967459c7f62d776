//! Set search over the display.
//!
//! `find_set` walks every triple `i < j < k` in layout order and returns
//! the first valid one. That is O(n³), at most 1140 triples for a
//! 20-card display.
//!
//! `count_sets` uses the completing-card rule instead: for any two cards
//! the third is fully determined, so a feature lookup brings it to O(n²).

use rustc_hash::FxHashMap;

use super::validation::{is_valid_features, third_card_features};
use crate::cards::{Card, Features};
use crate::core::entity::CardId;

/// Layout indices of the first valid triple, if any.
#[must_use]
pub fn find_set_indices(cards: &[Card]) -> Option<[usize; 3]> {
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_features([cards[i].features, cards[j].features, cards[k].features]) {
                    return Some([i, j, k]);
                }
            }
        }
    }
    None
}

/// The first valid triple in layout order, if any.
#[must_use]
pub fn find_set(cards: &[Card]) -> Option<[Card; 3]> {
    find_set_indices(cards).map(|[i, j, k]| [cards[i], cards[j], cards[k]])
}

/// Whether any valid triple exists.
#[must_use]
pub fn set_is_available(cards: &[Card]) -> bool {
    find_set_indices(cards).is_some()
}

/// Every valid triple, in the same order `find_set` visits them.
#[must_use]
pub fn find_all_sets(cards: &[Card]) -> Vec<[CardId; 3]> {
    let n = cards.len();
    let mut sets = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_features([cards[i].features, cards[j].features, cards[k].features]) {
                    sets.push([cards[i].id, cards[j].id, cards[k].id]);
                }
            }
        }
    }
    sets
}

/// Number of valid triples, via completing-card lookup.
#[must_use]
pub fn count_sets(cards: &[Card]) -> usize {
    let index: FxHashMap<Features, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| (c.features, i))
        .collect();

    let mut count = 0;
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let wanted = third_card_features(&cards[i], &cards[j]);
            if matches!(index.get(&wanted), Some(&k) if k > j) {
                count += 1;
            }
        }
    }
    count
}
