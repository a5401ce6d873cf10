//! The scripted opponent.
//!
//! A one-ply heuristic, deliberately not a search: it classifies each empty
//! cell by what happens if either side marks it next (`classify`), then picks
//! uniformly within the most harmless non-empty bucket (`strategy`).

pub mod classify;
pub mod strategy;

pub use classify::{winning_cells, Bucket, Classification};
pub use strategy::{LoseSeekingOpponent, OpponentDecision, OpponentStrategy};
