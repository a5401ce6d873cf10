//! Round status, outcome, and the end-of-move check.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Mark;

/// Whether a round is still accepting moves.
///
/// Once `Finished`, a round never returns to `Playing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    Playing,
    Finished,
}

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Winner(Mark),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, Outcome::Winner(m) if *m == mark)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

/// How the round is heading towards its end, for narration only.
///
/// Flips to `Suicide` the first time the opponent relabels a forced win as
/// the human's move and stays there until the next round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndingMode {
    #[default]
    Regular,
    Suicide,
}

/// Check whether the round ends after `mark` was just written to `board`.
///
/// A line for `mark` wins; otherwise a full board is a draw; otherwise the
/// round continues (`None`). Only the mark just placed is checked for a line.
#[must_use]
pub fn evaluate_after_placement(board: &Board, mark: Mark) -> Option<Outcome> {
    if board.has_won(mark) {
        Some(Outcome::Winner(mark))
    } else if board.remaining_empty_count() == 0 {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(Mark::B);
        assert!(!result.is_winner(Mark::A));
        assert!(result.is_winner(Mark::B));
        assert_eq!(result.winner(), Some(Mark::B));

        let draw = Outcome::Draw;
        assert!(!draw.is_winner(Mark::A));
        assert!(!draw.is_winner(Mark::B));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(RoundStatus::default(), RoundStatus::Playing);
        assert_eq!(EndingMode::default(), EndingMode::Regular);
    }

    #[test]
    fn test_evaluate_win() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(evaluate_after_placement(&board, Mark::A), Some(Outcome::Winner(Mark::A)));
    }

    #[test]
    fn test_evaluate_only_checks_placed_mark() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(evaluate_after_placement(&board, Mark::B), None);
    }

    #[test]
    fn test_evaluate_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate_after_placement(&board, Mark::A), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(evaluate_after_placement(&board, Mark::A), Some(Outcome::Winner(Mark::A)));
    }

    #[test]
    fn test_evaluate_continues() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(evaluate_after_placement(&board, Mark::B), None);
    }
}
