//! Deterministic random number generation for playouts.
//!
//! The state machine itself never draws random numbers: chance nodes expose
//! their outcome distribution and the driver samples from it. `GameRng` is the
//! driver-side source of that randomness.
//!
//! - **Deterministic**: same seed, same sequence
//! - **Forkable**: independent branches for parallel playouts
//! - **Checkpointable**: O(1) state capture and restore
//!
//! ```
//! use rust_schafkopf::core::GameRng;
//!
//! let mut rng = GameRng::new(7);
//! let mut branch = rng.fork();
//!
//! let mut replay = GameRng::new(7);
//! let mut replay_branch = replay.fork();
//! assert_eq!(branch.gen_index(100), replay_branch.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic, forkable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Derive an independent branch. Each fork gets a distinct, reproducible seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Pick uniformly from a slice. `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        items.choose(&mut self.inner)
    }

    /// Sample an outcome from `(outcome, probability)` pairs.
    ///
    /// Probabilities need not be normalised. Returns `None` when the
    /// distribution is empty or has no positive mass.
    pub fn sample_outcome<T: Copy>(&mut self, outcomes: &[(T, f64)]) -> Option<T> {
        let total: f64 = outcomes.iter().map(|&(_, p)| p).sum();
        if outcomes.is_empty() || total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f64>() * total;
        for &(outcome, p) in outcomes.iter().filter(|&&(_, p)| p > 0.0) {
            threshold -= p;
            if threshold <= 0.0 {
                return Some(outcome);
            }
        }

        // Rounding left a sliver of mass past the last outcome.
        outcomes.iter().rev().find(|&&(_, p)| p > 0.0).map(|&(o, _)| o)
    }

    /// Capture the current position for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
    pub fork_counter: u64,
}
