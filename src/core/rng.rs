//! Injectable randomness.
//!
//! Every random decision in the engine (role assignment, first mover,
//! tie-breaks between equally good cells, the suicide threshold) consumes one
//! uniform draw in `[0, 1)` from a [`RandomSource`]. Sessions own their source,
//! so tests substitute a [`ScriptedRng`] to pin each draw.
//!
//! ## Usage
//!
//! ```
//! use reverse_ttt::core::{GameRng, RandomSource, ScriptedRng};
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_unit(), b.next_unit());
//!
//! // Scripted draws replay in order and cycle
//! let mut scripted = ScriptedRng::new([0.75, 0.25]);
//! assert!(scripted.coin());
//! assert!(!scripted.coin());
//! assert!(scripted.coin());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource: Send {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Fair coin: true when the draw is at least 0.5.
    fn coin(&mut self) -> bool {
        self.next_unit() >= 0.5
    }

    /// Uniform index in `0..len`, computed as `floor(draw * len)`.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on an empty range");
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Deterministic RNG for sessions.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept so a round can be replayed from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Intended for tests and harnesses that need to pin every random decision.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source from draws in `[0, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `draws` is empty or any draw is outside `[0, 1)`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: Vec<f64> = draws.into_iter().collect();
        assert!(!draws.is_empty(), "ScriptedRng needs at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "ScriptedRng draws must lie in [0, 1)"
        );
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
