use thiserror::Error;

use super::coord::Coord;

/// Errors raised by the engine.
///
/// Rejected clicks (occupied cell, wrong turn, finished round) are not errors;
/// see `session::IgnoreReason`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("opponent asked to move with no empty cells left")]
    NoEmptyCells,

    #[error("opponent chose occupied cell {0}")]
    OpponentChoseOccupied(Coord),

    #[error("board size {0} is too small, lines need at least 3 cells")]
    InvalidBoardSize(usize),

    #[error("malformed board text: {0}")]
    MalformedBoard(String),
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
