//! Deck construction and initial layout tests.
//!
//! These tests verify that every game starts from a complete deck:
//! - 81 cards, no repeated feature combination
//! - 12 on display, 69 face down
//! - Fresh IDs on every restart

use rustc_hash::FxHashSet;

use set_game::cards::{new_deck, DECK_SIZE};
use set_game::core::{GameRng, IdAllocator};
use set_game::games::standard::SetGame;

/// Test that every seed yields all 81 combinations exactly once.
#[test]
fn test_deck_completeness_across_seeds() {
    for seed in 0..50 {
        let deck = new_deck(&mut GameRng::new(seed), &mut IdAllocator::new());

        assert_eq!(deck.len(), DECK_SIZE);
        let combos: FxHashSet<_> = deck.iter().map(|c| c.features).collect();
        assert_eq!(combos.len(), DECK_SIZE, "seed {seed} repeated a combination");
        let ids: FxHashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }
}

/// Test that shuffling does not favour any position.
///
/// Over many seeds, each combination should lead the deck roughly
/// 1/81 of the time. The bound is loose; it only catches a shuffle that
/// is badly broken (e.g. a no-op).
#[test]
fn test_shuffle_spreads_first_card() {
    let trials = 4050;
    let mut leading = vec![0usize; DECK_SIZE];

    for seed in 0..trials {
        let deck = new_deck(&mut GameRng::new(seed), &mut IdAllocator::new());
        leading[deck[0].features.ordinal()] += 1;
    }

    let expected = trials as usize / DECK_SIZE;
    for (ordinal, &count) in leading.iter().enumerate() {
        assert!(
            count < expected * 3,
            "combination {ordinal} led the deck {count} times (expected about {expected})"
        );
    }
}

/// Test the standard opening layout.
#[test]
fn test_initial_layout() {
    let game = SetGame::new_game(2024);
    let snapshot = game.snapshot();

    assert_eq!(snapshot.displayed.len(), 12);
    assert_eq!(snapshot.deck_count, DECK_SIZE - 12);
    assert_eq!(snapshot.removed_count, 0);
    assert_eq!(snapshot.total_cards(), DECK_SIZE);
    assert_eq!(snapshot.score, 0);
}

/// Test that the same seed always lays out the same cards.
#[test]
fn test_layout_is_deterministic() {
    let a = SetGame::new_game(77);
    let b = SetGame::new_game(77);
    let c = SetGame::new_game(78);

    assert_eq!(a.displayed_cards(), b.displayed_cards());
    assert_ne!(a.displayed_cards(), c.displayed_cards());
}

/// Test that restarting never reuses a card ID.
#[test]
fn test_restart_discards_old_identities() {
    let mut game = SetGame::new_game(5);
    let mut seen: FxHashSet<_> = game.displayed_cards().iter().map(|c| c.id).collect();

    for _ in 0..5 {
        let snapshot = game.restart();
        assert_eq!(snapshot.total_cards(), DECK_SIZE);

        for card in snapshot.displayed.iter() {
            assert!(seen.insert(card.id), "{} was reused", card.id);
        }
    }
}
