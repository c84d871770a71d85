//! Seeded move selection for playouts.
//!
//! A `GameRng` picks which empty cell a simulated player marks. The same
//! seed always picks the same cells, so a playout is reproducible from
//! its seed alone. A batch of games draws one seed per game with
//! `next_game`, and a paused simulation resumes from an `RngCheckpoint`.
//!
//! ```
//! use tic_tac_toe::core::GameRng;
//!
//! let cells = [1, 4, 7];
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.pick_cell(&cells), b.pick_cell(&cells));
//! assert_eq!(GameRng::new(0).pick_cell(&[]), None);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment, spreads per-game seeds across the seed space.
const GAME_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic cell picker backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    games: u64,
}

impl GameRng {
    /// Create a picker from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            games: 0,
        }
    }

    /// Get the seed this picker started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the picker for the next game of a batch.
    ///
    /// The n-th call on pickers with equal seeds yields equal pickers,
    /// independent of how many cells were picked in between.
    #[must_use]
    pub fn next_game(&mut self) -> Self {
        self.games += 1;
        Self::new(self.seed.wrapping_add(self.games.wrapping_mul(GAME_SEED_STRIDE)))
    }

    /// Pick one of `cells` uniformly, or `None` if there are none.
    pub fn pick_cell(&mut self, cells: &[usize]) -> Option<usize> {
        cells.choose(&mut self.inner).copied()
    }

    /// Capture the picker's position so a simulation can resume later.
    #[must_use]
    pub fn checkpoint(&self) -> RngCheckpoint {
        RngCheckpoint {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            games: self.games,
        }
    }

    /// Resume from a checkpoint; subsequent picks match the original's.
    #[must_use]
    pub fn restore(checkpoint: &RngCheckpoint) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(checkpoint.seed);
        inner.set_word_pos(checkpoint.word_pos);
        Self {
            inner,
            seed: checkpoint.seed,
            games: checkpoint.games,
        }
    }
}

/// Serializable position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngCheckpoint {
    pub seed: u64,
    /// ChaCha8 word position; O(1) to restore however many picks were made.
    pub word_pos: u128,
    /// Games already derived with `next_game`.
    pub games: u64,
}
