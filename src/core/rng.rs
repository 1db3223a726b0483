//! Random sources for battle decisions.
//!
//! ## Key Features
//!
//! - **Injectable**: battles draw through the [`RandomSource`] trait
//! - **Deterministic**: same seed produces an identical sequence
//! - **Forkable**: independent streams for concurrent battle sessions
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use meal_max::core::{BattleRng, RandomSource};
//!
//! let mut rng = BattleRng::new(42);
//! let draw = rng.next_unit();
//! assert!((0.0..1.0).contains(&draw));
//!
//! // Each session gets its own fork
//! let mut session_a = rng.fork();
//! let mut session_b = rng.fork();
//! assert_ne!(session_a.next_unit(), session_b.next_unit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::{BattleError, Result};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seeded ChaCha8 random source.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The seed is kept, so `state()` still captures a replayable position.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a named context (e.g. one per arena).
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for BattleRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// ```
/// use meal_max::core::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.1, 0.9]).unwrap();
/// assert_eq!(source.next_unit(), 0.1);
/// assert_eq!(source.next_unit(), 0.9);
/// assert_eq!(source.next_unit(), 0.1);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Build a source from draws that must all lie in `[0, 1)`.
    pub fn new(draws: Vec<f64>) -> Result<Self> {
        if draws.is_empty() {
            return Err(BattleError::InvalidConfig(
                "scripted source needs at least one draw".to_string(),
            ));
        }
        if let Some(bad) = draws.iter().find(|d| !(0.0..1.0).contains(*d)) {
            return Err(BattleError::InvalidConfig(format!(
                "scripted draw {bad} is outside [0, 1)"
            )));
        }
        Ok(Self { draws, cursor: 0 })
    }

    /// A source that always returns `draw`.
    pub fn constant(draw: f64) -> Result<Self> {
        Self::new(vec![draw])
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws_taken(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}
