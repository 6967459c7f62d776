//! Seeded shuffling.
//!
//! A session holds one `GameRng` built from its seed. Every game forks a
//! child stream from it, and every deck order (initial or reshuffled) is
//! drawn from that child. Replaying the same actions from the same seed
//! therefore deals the same cards.
//!
//! ```
//! use set_game::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut deck_a: Vec<u32> = (0..81).collect();
//! let mut deck_b = deck_a.clone();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//!
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio step between child seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream plus the bookkeeping needed to fork and checkpoint it.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    games: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            games: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child stream for the next game.
    ///
    /// The n-th fork of a given seed is always the same, so the n-th
    /// restart of a session always deals the same deck.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.games += 1;
        Self::new(self.seed.wrapping_add(self.games.wrapping_mul(FORK_STEP)))
    }

    /// Uniform in-place shuffle.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.stream);
    }

    /// Checkpoint of the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
            games: self.games,
        }
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(state.seed);
        stream.set_word_pos(state.word_pos);
        Self {
            stream,
            seed: state.seed,
            games: state.games,
        }
    }
}

/// Serializable position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,

    /// ChaCha8 word position.
    pub word_pos: u128,

    /// Children forked so far.
    pub games: u64,
}
