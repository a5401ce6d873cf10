//! Read-only view of a session, handed to the presentation layer.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::narration::Verdict;
use crate::board::Board;
use crate::core::{Coord, Mark, Role};
use crate::rules::{EndingMode, Outcome, RoundStatus};

/// One mark written during the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub coord: Coord,
    /// Mark actually written.
    pub mark: Mark,
    /// Who chose the cell. After a suicide relabel this is `Opponent` while
    /// `mark` is the human's.
    pub decided_by: Role,
}

/// Everything the UI needs to redraw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Bumped on every mutating call.
    pub revision: u64,
    pub board: Board,
    pub status: RoundStatus,
    pub outcome: Option<Outcome>,
    pub ending_mode: EndingMode,
    pub human: Mark,
    pub opponent: Mark,
    pub current: Mark,
    pub history: Vec<Placement>,
}

impl SessionSnapshot {
    /// Verdict text for a finished round.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.outcome
            .map(|outcome| Verdict::of(outcome, self.human, self.ending_mode))
    }

    /// Whether a "play again" action should be offered.
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    /// Plain-text rendering: role lines, the grid, and the verdict if any.
    ///
    /// ```text
    /// Player: X
    /// CPU: O
    /// Next Turn: X
    /// X.O
    /// .X.
    /// O..
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", Role::Human, self.human);
        let _ = writeln!(out, "{}: {}", Role::Opponent, self.opponent);
        let _ = writeln!(out, "Next Turn: {}", self.current);
        let _ = write!(out, "{}", self.board);
        if let Some(verdict) = self.verdict() {
            let _ = write!(out, "\n{verdict}");
        }
        out
    }
}
