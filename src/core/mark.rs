//! Marks, cells, and roles.
//!
//! ## Mark
//!
//! One of the two symbols a player can place. `Mark::A` renders as `X`,
//! `Mark::B` as `O`.
//!
//! ## Cell
//!
//! The content of one grid square: empty or holding a mark. A cell is never
//! cleared once marked within a round.
//!
//! ## Role
//!
//! Who is behind a mark for the current round: the human or the scripted
//! opponent.

use serde::{Deserialize, Serialize};

/// A symbol a player can place on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First mark, rendered as `X`.
    #[default]
    A,
    /// Second mark, rendered as `O`.
    B,
}

impl Mark {
    /// Both marks, `A` first.
    pub const ALL: [Mark; 2] = [Mark::A, Mark::B];

    /// The other mark.
    ///
    /// ```
    /// use reverse_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::A.other(), Mark::B);
    /// assert_eq!(Mark::B.other(), Mark::A);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Single-character symbol used for text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::A => 'X',
            Mark::B => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of one board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds the given mark.
    Marked(Mark),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Whether this cell holds exactly `mark`.
    #[must_use]
    pub fn holds(self, mark: Mark) -> bool {
        self == Cell::Marked(mark)
    }

    /// Text symbol: the mark's symbol, or `.` when empty.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(mark) => mark.symbol(),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// Which side of the table a mark belongs to for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The person clicking cells.
    Human,
    /// The scripted opponent.
    Opponent,
}

impl Role {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Role::Human => Role::Opponent,
            Role::Opponent => Role::Human,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Human => write!(f, "Player"),
            Role::Opponent => write!(f, "CPU"),
        }
    }
}
