//! Winning lines on an N×N grid.
//!
//! A line is a full row, a full column, the main diagonal, or the
//! anti-diagonal. An N×N grid has `2N + 2` lines.

use crate::core::Coord;

/// One candidate winning line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Coordinates on this line for a `size`×`size` grid, in scan order.
    pub fn coords(self, size: usize) -> impl Iterator<Item = Coord> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Coord::new(row, i),
            Line::Column(col) => Coord::new(i, col),
            Line::MainDiagonal => Coord::new(i, i),
            Line::AntiDiagonal => Coord::new(i, size - i - 1),
        })
    }

    /// Whether `coord` lies on this line.
    #[must_use]
    pub fn contains(self, coord: Coord, size: usize) -> bool {
        match self {
            Line::Row(row) => coord.row == row,
            Line::Column(col) => coord.col == col,
            Line::MainDiagonal => coord.row == coord.col,
            Line::AntiDiagonal => coord.row + coord.col + 1 == size,
        }
    }
}

/// All lines of a `size`×`size` grid: rows, then columns, then both diagonals.
pub fn all_lines(size: usize) -> impl Iterator<Item = Line> {
    (0..size)
        .map(Line::Row)
        .chain((0..size).map(Line::Column))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}
