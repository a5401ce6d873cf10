//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A `(row, col)` position on the board, 0-indexed.
///
/// A `Coord` is not tied to a board size; bounds are checked by the board
/// that receives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies inside a `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index into a `size`-wide grid.
    ///
    /// Only meaningful when `in_bounds(size)` holds.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
