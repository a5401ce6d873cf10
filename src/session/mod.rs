//! Game sessions: round lifecycle, move intake, and what the UI reads.
//!
//! ## Entry points
//!
//! - `GameSession::start_round`: fresh board, roles, first mover
//! - `GameSession::submit_move`: the human's click
//!
//! Both notify subscribed observers with a `SessionSnapshot` afterwards.

pub mod game;
pub mod narration;
pub mod observer;
pub mod snapshot;

pub use game::{GameSession, GameSessionBuilder, IgnoreReason, MoveOutcome};
pub use narration::Verdict;
pub use observer::StateObserver;
pub use snapshot::{Placement, SessionSnapshot};
