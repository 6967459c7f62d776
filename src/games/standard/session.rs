//! Game session: the handle a presentation layer drives.

use im::Vector;
use tracing::debug;

use super::rules::StandardRules;
use crate::cards::Card;
use crate::core::{
    Action, ActionOutcome, ActionRecord, CardId, ConfigError, EngineState, GameConfig, GameState,
    ResolveOutcome,
};
use crate::rules::{set_is_available, GameResult, RulesEngine};
use crate::zones::Board;

/// One player's game session.
///
/// Owns the only `GameState` of the session. Every operation takes
/// `&mut self`, runs synchronously, and returns a fresh snapshot (or, for
/// resolution, what happened). Timing of the feedback clear is left to
/// the caller.
///
/// ```
/// use set_game::games::standard::SetGame;
///
/// let mut game = SetGame::new_game(42);
/// assert_eq!(game.displayed_cards().len(), 12);
/// assert_eq!(game.deck_count(), 69);
///
/// let first = game.displayed_cards()[0].id;
/// let state = game.toggle_selection(first);
/// assert!(state.displayed[0].is_selected());
/// ```
#[derive(Clone, Debug)]
pub struct SetGame {
    rules: StandardRules,
    state: GameState,
}

impl SetGame {
    /// Start a session with the standard rules.
    #[must_use]
    pub fn new_game(seed: u64) -> Self {
        let config = GameConfig::default();
        let state = GameState::new(&config, seed);
        debug!(seed, "session started");
        Self {
            rules: StandardRules::new(config),
            state,
        }
    }

    /// Start a session with custom rules.
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, seed);
        debug!(seed, ?config, "session started");
        Ok(Self {
            rules: StandardRules::new(config),
            state,
        })
    }

    /// Rebuild a session by replaying a recorded log from its seed.
    pub fn replay(
        config: GameConfig,
        seed: u64,
        records: &[ActionRecord],
    ) -> Result<Self, ConfigError> {
        let mut game = Self::with_config(config, seed)?;
        for record in records {
            game.apply(record.action);
        }
        Ok(game)
    }

    /// Replace the current layout with a hand-made one.
    ///
    /// The board is not part of the action history, so `replay` cannot
    /// rebuild a session set up this way.
    ///
    /// Panics if the board does not account for a full deck.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.state.set_board(board);
        self.state.check_invariants();
        self
    }

    /// Apply any action, recording it if it had an effect.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        let outcome = self.rules.apply_action(&mut self.state, &action);
        if !outcome.is_ignored() {
            self.state.record_action(action);
        }
        outcome
    }

    // === Operations ===

    /// Select or deselect a displayed card. Unknown IDs are ignored.
    pub fn toggle_selection(&mut self, card_id: CardId) -> EngineState {
        self.apply(Action::Toggle(card_id));
        self.snapshot()
    }

    /// Evaluate the selection if it holds exactly three cards.
    pub fn resolve_if_complete(&mut self) -> ResolveOutcome {
        match self.apply(Action::Resolve) {
            ActionOutcome::Resolved(outcome) => outcome,
            _ => ResolveOutcome::none(),
        }
    }

    /// Return selected and feedback cards to unselected.
    pub fn clear_feedback(&mut self) -> EngineState {
        self.apply(Action::ClearFeedback);
        self.snapshot()
    }

    /// Deal more cards, paying the penalty if a set was showing.
    pub fn deal(&mut self) -> EngineState {
        self.apply(Action::Deal);
        self.snapshot()
    }

    /// Re-randomize the deck order.
    pub fn shuffle(&mut self) -> EngineState {
        self.apply(Action::Shuffle);
        self.snapshot()
    }

    /// Mark up to `count` cards of the first available set.
    pub fn show_hint(&mut self, count: usize) -> EngineState {
        self.apply(Action::Hint(count));
        self.snapshot()
    }

    /// Remove hint marks.
    pub fn clear_hint(&mut self) -> EngineState {
        self.apply(Action::ClearHint);
        self.snapshot()
    }

    /// Throw the current game away and deal a new one.
    pub fn restart(&mut self) -> EngineState {
        self.apply(Action::Restart);
        self.snapshot()
    }

    // === Projections ===

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.state.board.deck_count()
    }

    #[must_use]
    pub fn displayed_cards(&self) -> &[Card] {
        self.state.board.displayed()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.state.score
    }

    #[must_use]
    pub fn sets_found(&self) -> u32 {
        self.state.sets_found
    }

    /// Whether a set is on display right now.
    #[must_use]
    pub fn set_is_available(&self) -> bool {
        set_is_available(self.state.board.displayed())
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Actions that would have an effect now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    /// Read-only access to the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Immutable view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> EngineState {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::MatchState;

    #[test]
    fn test_new_game() {
        let game = SetGame::new_game(42);

        assert_eq!(game.displayed_cards().len(), 12);
        assert_eq!(game.deck_count(), 69);
        assert_eq!(game.score(), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_with_config_rejects_bad_config() {
        let err = SetGame::with_config(GameConfig::new().with_deal_size(0), 1).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDealSize);
    }

    #[test]
    fn test_with_config_initial_display() {
        let game = SetGame::with_config(GameConfig::new().with_initial_display(20), 1).unwrap();

        assert_eq!(game.displayed_cards().len(), 20);
        assert_eq!(game.deck_count(), 61);
    }

    #[test]
    fn test_ignored_actions_are_not_recorded() {
        let mut game = SetGame::new_game(3);

        game.toggle_selection(CardId(10_000));
        game.resolve_if_complete();
        game.clear_feedback();
        assert!(game.history().is_empty());

        game.shuffle();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].action, Action::Shuffle);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut game = SetGame::new_game(3);
        let id = game.displayed_cards()[5].id;

        let state = game.toggle_selection(id);
        assert_eq!(state.ids_in_state(MatchState::Selected), vec![id]);

        let state = game.toggle_selection(id);
        assert!(state.ids_in_state(MatchState::Selected).is_empty());
        assert_eq!(state.displayed[5].match_state, MatchState::Unselected);
    }

    #[test]
    fn test_restart_resets_score_and_keeps_history() {
        let mut game = SetGame::with_config(GameConfig::new().with_initial_score(7), 3).unwrap();
        game.deal();

        let state = game.restart();
        assert_eq!(state.score, 7);
        assert_eq!(state.game_number, 2);
        assert_eq!(state.displayed.len(), 12);
        assert_eq!(game.history().len(), 2);
    }
}
