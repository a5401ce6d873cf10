//! Fixed game constants and session configuration.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Side length of the playing grid.
pub const BOARD_SIZE: usize = 3;

/// Smallest board on which lines are evaluated.
pub const MIN_BOARD_SIZE: usize = 3;

/// Lower bound (exclusive) of the draw that triggers the suicide deviation.
pub const SUICIDE_LOWER: f64 = 0.05;

/// Upper bound (exclusive) of the draw that triggers the suicide deviation.
pub const SUICIDE_UPPER: f64 = 0.95;

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the session RNG.
    /// `None` seeds from OS entropy; `Some` makes every round reproducible.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// Whether a draw falls in the open suicide band `(SUICIDE_LOWER, SUICIDE_UPPER)`.
#[must_use]
pub fn in_suicide_band(draw: f64) -> bool {
    draw > SUICIDE_LOWER && draw < SUICIDE_UPPER
}
