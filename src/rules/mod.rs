//! Round rules: status, outcome, ending mode, and end-of-move evaluation.
//!
//! After every placement the session asks `evaluate_after_placement`:
//! - the mark just placed completed a line: that mark wins
//! - the board is full: draw
//! - otherwise the round continues

pub mod engine;

pub use engine::{evaluate_after_placement, EndingMode, Outcome, RoundStatus};
