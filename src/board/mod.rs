//! Board model: the N×N grid and its win evaluation.
//!
//! The game is played on a 3×3 board, but every operation here is written for
//! any side length N ≥ 3. Hypothetical "what-if" placements go through cloned
//! snapshots (`Board::with_placed`, `Board::wins_if_placed`) so the live board
//! is never touched while the opponent looks ahead.

pub mod grid;
pub mod lines;

pub use grid::Board;
pub use lines::{all_lines, Line};
