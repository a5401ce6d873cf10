//! Core engine types: marks, coordinates, randomness, configuration, errors.
//!
//! Everything else in the crate builds on these; nothing here knows about
//! boards or sessions.

pub mod mark;
pub mod coord;
pub mod rng;
pub mod config;
pub mod error;

pub use mark::{Cell, Mark, Role};
pub use coord::Coord;
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{
    in_suicide_band, SessionConfig, BOARD_SIZE, MIN_BOARD_SIZE, SUICIDE_LOWER, SUICIDE_UPPER,
};
pub use error::{EngineError, Result};
