//! # reverse-ttt
//!
//! Tic-tac-toe in reverse: the human tries to lose, and a scripted opponent
//! tries just as hard not to win.
//!
//! ## Design Principles
//!
//! 1. **Explicit sessions**: all round state lives in a `GameSession`.
//!    There is no global game; sessions can run side by side.
//!
//! 2. **Injected randomness**: every random decision draws from a
//!    `RandomSource` owned by the session, so tests can pin each draw.
//!
//! 3. **Synchronous moves**: a human move and the opponent's reply happen in
//!    one call. No background work, no suspension points.
//!
//! ## The Opponent
//!
//! One ply deep, on purpose. Each empty cell is classified as `Safe` (nobody
//! completes a line there), `Defensive` (only the human would) or `Forced`
//! (the opponent would). The opponent picks uniformly from the best
//! non-empty bucket in that order. When only `Forced` cells remain it usually
//! (draw in `(0.05, 0.95)`) hands the move to the human instead, so the
//! human's mark completes the line: the suicide deviation.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, roles, coordinates, RNG, configuration, errors
//! - `board`: N×N grid with what-if snapshots and win evaluation
//! - `rules`: Round status, outcome, ending mode, end-of-move check
//! - `turn`: Role binding and the turn pointer
//! - `opponent`: Cell classification and the lose-seeking strategy
//! - `session`: Round lifecycle, snapshots, observers, verdicts
//!
//! ## Example
//!
//! ```
//! use reverse_ttt::{GameSession, RoundStatus, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::default().with_seed(7)).unwrap();
//! while session.status() == RoundStatus::Playing {
//!     let cell = session.board().empty_cells()[0];
//!     session.submit_move(cell.row, cell.col).unwrap();
//! }
//! assert!(session.outcome().is_some());
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod turn;
pub mod opponent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cell, Coord, EngineError, GameRng, Mark, RandomSource, Result, Role, ScriptedRng,
    SessionConfig, BOARD_SIZE,
};

pub use crate::board::{Board, Line};

pub use crate::rules::{EndingMode, Outcome, RoundStatus};

pub use crate::turn::{RoleAssignment, TurnController};

pub use crate::opponent::{
    Bucket, Classification, LoseSeekingOpponent, OpponentDecision, OpponentStrategy,
};

pub use crate::session::{
    GameSession, GameSessionBuilder, IgnoreReason, MoveOutcome, Placement, SessionSnapshot,
    StateObserver, Verdict,
};
