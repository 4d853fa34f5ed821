//! Seeded randomness for the bot.
//!
//! Every random choice a strategy makes goes through `GameRng`, so a match
//! replays exactly from its seed and a checkpoint resumes the same stream.
//!
//! ```
//! use rps_referee::core::{GameRng, Move};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick(&Move::ALL), b.pick(&Move::ALL));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Deterministic move picker backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeded from the thread-local entropy source. The seed is still
    /// recorded so the match can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from a pool of moves; `None` for an empty pool.
    pub fn pick(&mut self, pool: &[Move]) -> Option<Move> {
        pool.choose(&mut self.inner).copied()
    }

    /// Position in the stream, for checkpoints.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Seed plus ChaCha8 word position. Constant size however many moves
/// have been picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
