//! Game state and observable snapshots.
//!
//! ## GameState
//!
//! The single mutable value of a session:
//! - Board (deck, display, removed count)
//! - Score and sets found
//! - Matched cards awaiting feedback clear
//! - RNG and ID allocator
//! - Action history
//!
//! ## EngineState
//!
//! Immutable snapshot handed to the presentation layer. Uses `im`
//! persistent vectors so cloning a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::entity::{CardId, IdAllocator};
use super::rng::GameRng;
use crate::cards::{new_deck, Card, MatchState, DECK_SIZE};
use crate::rules::search::set_is_available;
use crate::zones::Board;

/// Full mutable state of a session.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Deck and display.
    pub board: Board,

    /// Current score.
    pub score: i64,

    /// Sets confirmed in the current game.
    pub sets_found: u32,

    /// Matched cards already off the board, kept for feedback rendering
    /// until `clear_feedback`.
    pub matched_feedback: SmallVec<[Card; 3]>,

    /// Number of the current game in this session (starts at 1).
    pub game_number: u32,

    /// Per-game RNG used for deck order.
    pub rng: GameRng,

    /// Session RNG; each game forks its own stream from it.
    session_rng: GameRng,

    /// Card IDs, shared by every game of the session.
    ids: IdAllocator,

    /// Applied actions, oldest first.
    pub history: Vector<ActionRecord>,

    next_sequence: u32,
}

impl GameState {
    /// Start the first game of a session.
    #[must_use]
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut session_rng = GameRng::new(seed);
        let mut rng = session_rng.fork();
        let mut ids = IdAllocator::new();
        let deck = new_deck(&mut rng, &mut ids);

        Self {
            board: Board::deal_initial(deck, config.initial_display),
            score: config.initial_score,
            sets_found: 0,
            matched_feedback: SmallVec::new(),
            game_number: 1,
            rng,
            session_rng,
            ids,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Replace the board with a fresh game.
    ///
    /// Old card IDs are never handed out again.
    pub fn reset(&mut self, config: &GameConfig) {
        self.rng = self.session_rng.fork();
        let deck = new_deck(&mut self.rng, &mut self.ids);
        self.board = Board::deal_initial(deck, config.initial_display);
        self.score = config.initial_score;
        self.sets_found = 0;
        self.matched_feedback.clear();
        self.game_number += 1;
    }

    /// Replace the board with a hand-made position.
    ///
    /// Used to set up specific layouts; the caller is responsible for the
    /// cards adding up to a full deck.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.matched_feedback.clear();
    }

    /// Seed the session was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.session_rng.seed()
    }

    // === Action History ===

    /// Record an applied action.
    pub fn record_action(&mut self, action: Action) {
        let record = ActionRecord::new(action, self.next_sequence);
        self.next_sequence += 1;
        self.history.push_back(record);
    }

    // === Invariants ===

    /// Panic if the board no longer accounts for a full deck or the
    /// selection has grown past three cards.
    pub fn check_invariants(&self) {
        assert_eq!(
            self.board.total_cards(),
            DECK_SIZE,
            "deck + displayed + removed must always equal {DECK_SIZE}"
        );
        let selected = self.board.cards_in_state(MatchState::Selected).count();
        assert!(selected <= 3, "selection holds {selected} cards");
    }

    /// Immutable view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> EngineState {
        EngineState {
            displayed: self.board.displayed().iter().copied().collect(),
            deck_count: self.board.deck_count(),
            removed_count: self.board.removed_count(),
            score: self.score,
            sets_found: self.sets_found,
            matched_feedback: self.matched_feedback.iter().copied().collect(),
            game_number: self.game_number,
            game_over: self.board.deck_count() == 0 && !set_is_available(self.board.displayed()),
        }
    }
}

/// Observable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Face-up cards in layout order.
    pub displayed: Vector<Card>,

    /// Face-down cards left.
    pub deck_count: usize,

    /// Cards cleared by matches.
    pub removed_count: usize,

    pub score: i64,

    pub sets_found: u32,

    /// Just-matched cards, already off the display, until feedback clears.
    pub matched_feedback: Vector<Card>,

    pub game_number: u32,

    /// Deck empty and no set left on display.
    pub game_over: bool,
}

impl EngineState {
    /// IDs of displayed cards in a given state.
    #[must_use]
    pub fn ids_in_state(&self, state: MatchState) -> Vec<CardId> {
        self.displayed
            .iter()
            .filter(|c| c.match_state == state)
            .map(|c| c.id)
            .collect()
    }

    /// Partition check as seen from outside.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck_count + self.displayed.len() + self.removed_count
    }
}
