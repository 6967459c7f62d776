//! Standard SET rules.

use tracing::{debug, trace, warn};

use crate::cards::MatchState;
use crate::core::{
    Action, ActionOutcome, CardId, GameConfig, GameState, ResolveOutcome,
};
use crate::rules::{find_set, is_valid_set, set_is_available, GameResult, RulesEngine};

/// The rules of the single-player game.
///
/// Stateless apart from its configuration; every mutation goes through
/// the `GameState` passed in.
#[derive(Clone, Debug, Default)]
pub struct StandardRules {
    config: GameConfig,
}

impl StandardRules {
    /// Rules with an already validated configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    fn toggle(&self, state: &mut GameState, id: CardId) -> ActionOutcome {
        let selected = state.board.selection().len();
        let Some(card) = state.board.get_mut(id) else {
            warn!(card = %id, "toggle for a card that is not on display");
            return ActionOutcome::Ignored;
        };

        if card.match_state.is_feedback() {
            debug!(card = %id, state = ?card.match_state, "toggle ignored while feedback is pending");
            return ActionOutcome::Ignored;
        }

        assert!(
            card.is_selected() || selected < 3,
            "selection already holds three cards; resolve before selecting {id}"
        );

        card.toggle();
        trace!(card = %id, state = ?card.match_state, "card toggled");
        ActionOutcome::Applied
    }

    fn resolve(&self, state: &mut GameState) -> ActionOutcome {
        let selection = state.board.selection();
        if selection.len() != 3 {
            trace!(selected = selection.len(), "selection incomplete, nothing to resolve");
            return ActionOutcome::Ignored;
        }

        let cards: Vec<_> = state
            .board
            .cards_in_state(MatchState::Selected)
            .copied()
            .collect();

        if !is_valid_set(&cards) {
            state
                .board
                .set_state_where(|c| c.is_selected(), MatchState::Mismatched);
            debug!(cards = ?selection.as_slice(), "mismatch");
            return ActionOutcome::Resolved(ResolveOutcome::none());
        }

        state
            .board
            .set_state_where(|c| c.is_selected(), MatchState::Matched);
        let removed = state.board.remove(&selection);
        state.matched_feedback = removed;
        state.score += self.config.set_reward;
        state.sets_found += 1;
        debug!(
            cards = ?selection.as_slice(),
            score = state.score,
            sets_found = state.sets_found,
            "set confirmed"
        );

        if self.config.refill_after_match
            && state.board.displayed().len() < self.config.initial_display
        {
            let dealt = state.board.draw(self.config.deal_size);
            debug!(dealt, "refilled display after match");
        }

        ActionOutcome::Resolved(ResolveOutcome {
            matched: true,
            removed_card_ids: selection,
        })
    }

    fn clear_feedback(&self, state: &mut GameState) -> ActionOutcome {
        let had_matched = !state.matched_feedback.is_empty();
        state.matched_feedback.clear();
        let reset = state.board.set_state_where(
            |c| c.match_state.is_cleared_by_feedback(),
            MatchState::Unselected,
        );

        if reset == 0 && !had_matched {
            return ActionOutcome::Ignored;
        }
        trace!(reset, "feedback cleared");
        ActionOutcome::Applied
    }

    fn deal(&self, state: &mut GameState) -> ActionOutcome {
        if state.board.deck_count() == 0 {
            debug!("deal ignored, deck is empty");
            return ActionOutcome::Ignored;
        }

        // Dealing while a set is showing is a misplay; it still goes ahead.
        let penalized = set_is_available(state.board.displayed());
        if penalized {
            state.score -= self.config.deal_penalty;
        }

        let count = state.board.draw(self.config.deal_size);
        debug!(count, penalized, score = state.score, "dealt");
        ActionOutcome::Dealt { count, penalized }
    }

    fn shuffle(&self, state: &mut GameState) -> ActionOutcome {
        if state.board.deck_count() == 0 {
            return ActionOutcome::Ignored;
        }
        state.board.shuffle_deck(&mut state.rng);
        trace!(deck = state.board.deck_count(), "deck shuffled");
        ActionOutcome::Applied
    }

    fn hint(&self, state: &mut GameState, count: usize) -> ActionOutcome {
        let Some(triple) = find_set(state.board.displayed()) else {
            debug!("no set on display, no hint");
            return ActionOutcome::Ignored;
        };

        state
            .board
            .set_state_where(|c| c.match_state == MatchState::Hinted, MatchState::Unselected);

        // Cards showing match feedback keep it; clear_feedback resets them.
        let ids = triple.map(|c| c.id);
        for id in ids.iter().take(count.min(3)) {
            if let Some(card) = state.board.get_mut(*id) {
                if !card.match_state.is_feedback() {
                    card.match_state = MatchState::Hinted;
                }
            }
        }
        debug!(cards = ?ids, shown = count.min(3), "hint");
        ActionOutcome::Hinted(ids)
    }

    fn clear_hint(&self, state: &mut GameState) -> ActionOutcome {
        let reset = state
            .board
            .set_state_where(|c| c.match_state == MatchState::Hinted, MatchState::Unselected);
        if reset == 0 {
            ActionOutcome::Ignored
        } else {
            ActionOutcome::Applied
        }
    }

    fn restart(&self, state: &mut GameState) -> ActionOutcome {
        state.reset(&self.config);
        debug!(game = state.game_number, "new game");
        ActionOutcome::Applied
    }
}

impl RulesEngine for StandardRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let board = &state.board;
        let selected = board.selection().len();
        let mut actions = Vec::new();

        for card in board.displayed() {
            let can_toggle = match card.match_state {
                MatchState::Matched | MatchState::Mismatched => false,
                MatchState::Selected => true,
                MatchState::Unselected | MatchState::Hinted => selected < 3,
            };
            if can_toggle {
                actions.push(Action::Toggle(card.id));
            }
        }

        if selected == 3 {
            actions.push(Action::Resolve);
        }
        if !state.matched_feedback.is_empty()
            || board.displayed().iter().any(|c| c.match_state.is_cleared_by_feedback())
        {
            actions.push(Action::ClearFeedback);
        }
        if board.deck_count() > 0 {
            actions.push(Action::Deal);
            actions.push(Action::Shuffle);
        }
        if set_is_available(board.displayed()) {
            actions.push(Action::Hint(3));
        }
        if board.cards_in_state(MatchState::Hinted).next().is_some() {
            actions.push(Action::ClearHint);
        }
        actions.push(Action::Restart);

        actions
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> ActionOutcome {
        let outcome = match *action {
            Action::Toggle(id) => self.toggle(state, id),
            Action::Resolve => self.resolve(state),
            Action::ClearFeedback => self.clear_feedback(state),
            Action::Deal => self.deal(state),
            Action::Shuffle => self.shuffle(state),
            Action::Hint(count) => self.hint(state, count),
            Action::ClearHint => self.clear_hint(state),
            Action::Restart => self.restart(state),
        };
        state.check_invariants();
        outcome
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let board = &state.board;
        if board.deck_count() > 0 || set_is_available(board.displayed()) {
            return None;
        }
        Some(GameResult {
            final_score: state.score,
            sets_found: state.sets_found,
            cards_left: board.displayed().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Card, Features};
    use crate::core::IdAllocator;
    use crate::zones::Board;

    /// Ordered full deck: card `i` has ordinal `i`, ID `i`.
    fn ordered_cards() -> Vec<Card> {
        full_deck(&mut IdAllocator::new())
    }

    /// Put the cards with the given ordinals on display, the rest in the deck.
    fn board_with(display: &[usize]) -> Board {
        let cards = ordered_cards();
        let displayed = display.iter().map(|&i| cards[i]).collect();
        let deck = cards
            .iter()
            .filter(|c| !display.contains(&(c.id.raw() as usize)))
            .copied()
            .collect();
        Board::from_parts(deck, displayed, 0)
    }

    fn state_with(display: &[usize]) -> GameState {
        let mut state = GameState::new(&GameConfig::default(), 1);
        state.set_board(board_with(display));
        state
    }

    fn features(i: usize) -> Features {
        ordered_cards()[i].features
    }

    #[test]
    fn test_ordinals_used_below_form_sets() {
        // 0, 1, 2 differ only in color; 0, 3, 6 only in shading.
        assert!(crate::rules::is_valid_features([features(0), features(1), features(2)]));
        assert!(crate::rules::is_valid_features([features(0), features(3), features(6)]));
        assert!(!crate::rules::is_valid_features([features(0), features(1), features(3)]));
    }

    #[test]
    fn test_toggle_and_resolve_match() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 2, 4]);

        for id in [0, 1, 2] {
            assert_eq!(rules.apply_action(&mut state, &Action::Toggle(CardId(id))), ActionOutcome::Applied);
        }

        let outcome = rules.apply_action(&mut state, &Action::Resolve);
        match outcome {
            ActionOutcome::Resolved(r) => {
                assert!(r.matched);
                assert_eq!(r.removed_card_ids.as_slice(), &[CardId(0), CardId(1), CardId(2)]);
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        assert_eq!(state.score, 3);
        assert_eq!(state.sets_found, 1);
        assert_eq!(state.board.displayed().len(), 1);
        assert_eq!(state.matched_feedback.len(), 3);
        assert!(state.matched_feedback.iter().all(|c| c.match_state == MatchState::Matched));
    }

    #[test]
    fn test_resolve_mismatch() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 3, 4]);

        for id in [0, 1, 3] {
            rules.apply_action(&mut state, &Action::Toggle(CardId(id)));
        }
        let outcome = rules.apply_action(&mut state, &Action::Resolve);

        assert_eq!(outcome, ActionOutcome::Resolved(ResolveOutcome::none()));
        assert_eq!(state.score, 0);
        assert_eq!(state.board.displayed().len(), 4);
        assert_eq!(state.board.cards_in_state(MatchState::Mismatched).count(), 3);
    }

    #[test]
    fn test_resolve_incomplete_is_ignored() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 2]);

        rules.apply_action(&mut state, &Action::Toggle(CardId(0)));
        assert_eq!(rules.apply_action(&mut state, &Action::Resolve), ActionOutcome::Ignored);
    }

    #[test]
    fn test_toggle_feedback_card_is_ignored() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 3]);
        for id in [0, 1, 3] {
            rules.apply_action(&mut state, &Action::Toggle(CardId(id)));
        }
        rules.apply_action(&mut state, &Action::Resolve);

        assert_eq!(
            rules.apply_action(&mut state, &Action::Toggle(CardId(0))),
            ActionOutcome::Ignored
        );
    }

    #[test]
    #[should_panic(expected = "selection already holds three cards")]
    fn test_fourth_selection_panics() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 2, 4]);
        for id in [0, 1, 2, 4] {
            rules.apply_action(&mut state, &Action::Toggle(CardId(id)));
        }
    }

    #[test]
    fn test_refill_after_match() {
        let rules = StandardRules::new(GameConfig::new().refill_after_match());
        let mut state = state_with(&[0, 1, 2, 4]);

        for id in [0, 1, 2] {
            rules.apply_action(&mut state, &Action::Toggle(CardId(id)));
        }
        rules.apply_action(&mut state, &Action::Resolve);

        // 4 - 3 + 3 refilled
        assert_eq!(state.board.displayed().len(), 4);
        assert_eq!(state.board.deck_count(), 74);
        assert_eq!(state.board.removed_count(), 3);
    }

    #[test]
    fn test_deal_penalty_only_when_set_showing() {
        let rules = StandardRules::default();

        let mut with_set = state_with(&[0, 1, 2]);
        assert_eq!(
            rules.apply_action(&mut with_set, &Action::Deal),
            ActionOutcome::Dealt { count: 3, penalized: true }
        );
        assert_eq!(with_set.score, -3);

        let mut without_set = state_with(&[0, 1, 3, 4]);
        assert_eq!(
            rules.apply_action(&mut without_set, &Action::Deal),
            ActionOutcome::Dealt { count: 3, penalized: false }
        );
        assert_eq!(without_set.score, 0);
    }

    #[test]
    fn test_hint_marks_prefix_of_first_set() {
        let rules = StandardRules::default();
        let mut state = state_with(&[4, 0, 1, 2]);

        let outcome = rules.apply_action(&mut state, &Action::Hint(2));
        assert_eq!(outcome, ActionOutcome::Hinted([CardId(0), CardId(1), CardId(2)]));

        let hinted: Vec<_> = state.board.cards_in_state(MatchState::Hinted).map(|c| c.id).collect();
        assert_eq!(hinted, vec![CardId(0), CardId(1)]);

        // A larger count is clamped to the triple.
        rules.apply_action(&mut state, &Action::Hint(10));
        assert_eq!(state.board.cards_in_state(MatchState::Hinted).count(), 3);

        assert_eq!(rules.apply_action(&mut state, &Action::ClearHint), ActionOutcome::Applied);
        assert_eq!(state.board.cards_in_state(MatchState::Hinted).count(), 0);
    }

    #[test]
    fn test_hint_without_set() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 3, 4]);

        assert_eq!(rules.apply_action(&mut state, &Action::Hint(3)), ActionOutcome::Ignored);
        assert_eq!(state.board.cards_in_state(MatchState::Hinted).count(), 0);
    }

    #[test]
    fn test_hint_without_set_keeps_old_marks() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 3, 4]);
        state.board.get_mut(CardId(1)).unwrap().match_state = MatchState::Hinted;

        assert_eq!(rules.apply_action(&mut state, &Action::Hint(3)), ActionOutcome::Ignored);
        let hinted: Vec<_> = state.board.cards_in_state(MatchState::Hinted).map(|c| c.id).collect();
        assert_eq!(hinted, vec![CardId(1)]);
    }

    #[test]
    fn test_hint_keeps_mismatch_feedback() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 2, 4]);

        // 0, 1, 4 share all but color and shading, with colors 0, 1, 1.
        for id in [0, 1, 4] {
            rules.apply_action(&mut state, &Action::Toggle(CardId(id)));
        }
        rules.apply_action(&mut state, &Action::Resolve);

        rules.apply_action(&mut state, &Action::Hint(3));
        let mismatched: Vec<_> = state.board.cards_in_state(MatchState::Mismatched).map(|c| c.id).collect();
        assert_eq!(mismatched, vec![CardId(0), CardId(1), CardId(4)]);
        let hinted: Vec<_> = state.board.cards_in_state(MatchState::Hinted).map(|c| c.id).collect();
        assert_eq!(hinted, vec![CardId(2)]);

        rules.apply_action(&mut state, &Action::ClearFeedback);
        assert_eq!(state.board.cards_in_state(MatchState::Unselected).count(), 3);
        assert_eq!(state.board.cards_in_state(MatchState::Hinted).count(), 1);
    }

    #[test]
    fn test_legal_actions() {
        let rules = StandardRules::default();
        let mut state = state_with(&[0, 1, 2, 4]);

        let actions = rules.legal_actions(&state);
        assert!(actions.contains(&Action::Toggle(CardId(4))));
        assert!(actions.contains(&Action::Deal));
        assert!(actions.contains(&Action::Hint(3)));
        assert!(!actions.contains(&Action::Resolve));

        for id in [0, 1, 2] {
            rules.apply_action(&mut state, &Action::Toggle(CardId(id)));
        }
        let actions = rules.legal_actions(&state);
        assert!(actions.contains(&Action::Resolve));
        assert!(actions.contains(&Action::Toggle(CardId(0))));
        assert!(!actions.contains(&Action::Toggle(CardId(4))));
    }

    #[test]
    fn test_terminal_when_deck_empty_and_no_set() {
        let rules = StandardRules::default();
        let mut state = GameState::new(&GameConfig::default(), 1);
        let cards = ordered_cards();

        // Everything but four set-free cards already cleared.
        let displayed = [0, 1, 3, 4].iter().map(|&i| cards[i]).collect();
        state.set_board(Board::from_parts(Vec::new(), displayed, 77));
        state.score = 50;

        assert_eq!(
            rules.is_terminal(&state),
            Some(GameResult {
                final_score: 50,
                sets_found: 0,
                cards_left: 4,
            })
        );
        assert!(state.snapshot().game_over);
    }

    #[test]
    fn test_not_terminal_at_start() {
        let rules = StandardRules::default();
        let state = GameState::new(&GameConfig::default(), 1);

        assert!(rules.is_terminal(&state).is_none());
    }
}
