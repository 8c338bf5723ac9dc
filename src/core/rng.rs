//! Random sources for next-card selection.
//!
//! ## Key Features
//!
//! - **Injectable**: selection takes any [`RandomSource`], so tests can
//!   script the exact draws the lottery sees
//! - **Deterministic**: same seed produces identical card order
//! - **Replayable**: a [`ReviewRng`] remembers the seed it was built from
//!
//! ## Usage
//!
//! ```
//! use flipcards::core::{RandomSource, ReviewRng};
//!
//! let mut rng = ReviewRng::new(42);
//! let mut replay = ReviewRng::new(rng.seed());
//!
//! assert_eq!(rng.draw_below(100), replay.draw_below(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform integer draws.
///
/// `draw_below(bound)` must return a value in `[0, bound)`. Callers never
/// pass a zero bound.
pub trait RandomSource {
    /// Draw a uniformly distributed integer in `[0, bound)`.
    fn draw_below(&mut self, bound: u64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw_below(&mut self, bound: u64) -> u64 {
        (**self).draw_below(bound)
    }
}

impl RandomSource for rand::rngs::ThreadRng {
    fn draw_below(&mut self, bound: u64) -> u64 {
        self.gen_range(0..bound)
    }
}

/// Deterministic RNG for review sessions.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct ReviewRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ReviewRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a randomly chosen seed.
    ///
    /// The seed is still recorded, so the resulting order can be replayed
    /// with [`ReviewRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Create an RNG from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ReviewRng {
    fn draw_below(&mut self, bound: u64) -> u64 {
        self.inner.gen_range(0..bound)
    }
}

/// Scripted draws for reproducible tests.
///
/// Replays the given raw values in order, cycling when exhausted. Each value
/// is reduced modulo the requested bound, so a script written for one deck
/// size stays in range for any other.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    values: Vec<u64>,
    cursor: usize,
}

impl ScriptedDraws {
    /// Create a script. An empty script always draws 0.
    #[must_use]
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws_taken(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedDraws {
    fn draw_below(&mut self, bound: u64) -> u64 {
        let raw = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        raw % bound
    }
}
