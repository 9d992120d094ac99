//! Injectable random selection.
//!
//! Every random choice the engine makes (heal target, attack target, Mafia
//! reveal, vote target, unassigned Mafia seat) goes through a
//! [`RandomSource`] owned by the game. Two implementations ship:
//!
//! - [`GameRng`]: seeded ChaCha8, deterministic and serializable.
//! - [`ScriptedRng`]: replays a fixed list of indices, for tests and for
//!   drivers that collect choices interactively.
//!
//! ```
//! use mafia_engine::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.pick(&[10, 20, 30]), rng2.pick(&[10, 20, 30]));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform index choices.
pub trait RandomSource {
    /// Pick an index in `0..len`. An empty range yields 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick one element uniformly, or `None` from an empty pool.
    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len()).min(items.len() - 1);
        Some(items[index])
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed; the same seed always yields the same game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
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

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.gen_range_usize(0..len)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position so capture and restore are O(1) no matter
/// how many numbers were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of indices.
///
/// Each pick consumes the next scripted index, reduced modulo the pool size.
/// Once the script runs out every pick returns 0 (the lowest seat in the
/// pool).
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create from the indices to replay.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: indices.into_iter().collect(),
        }
    }

    /// Queue another index.
    pub fn push(&mut self, index: usize) {
        self.script.push_back(index);
    }

    /// Indices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        match self.script.pop_front() {
            Some(i) if len > 0 => i % len,
            _ => 0,
        }
    }
}
