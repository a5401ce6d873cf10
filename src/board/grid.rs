//! The N×N grid of cells and its win evaluation.

use std::fmt;
use std::str::FromStr;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::lines::all_lines;
use crate::core::{Cell, Coord, EngineError, Mark, Result, BOARD_SIZE, MIN_BOARD_SIZE};

/// Square grid of cells, stored row-major.
///
/// Uses an `im` persistent vector so `clone()` is O(1): the opponent clones
/// the live board for every hypothetical placement it evaluates. Clones share
/// no mutable state; writing to one never shows through in another.
///
/// ## Invariant
///
/// `remaining_empty_count() + placed_count() == size * size`, and a marked
/// cell is never cleared. Deserialization checks the size and cell count and
/// recounts the empty cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
    remaining: usize,
}

/// Wire form of a [`Board`].
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vector<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = EngineError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let BoardRepr { size, cells } = repr;
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidBoardSize(size));
        }
        if cells.len() != size * size {
            return Err(EngineError::MalformedBoard(format!(
                "expected {} cells for a {size}x{size} board, found {}",
                size * size,
                cells.len()
            )));
        }
        let remaining = cells.iter().filter(|cell| cell.is_empty()).count();
        Ok(Self {
            size,
            cells,
            remaining,
        })
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            size: board.size,
            cells: board.cells,
        }
    }
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidBoardSize` when `size < 3`.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    /// Create the empty 3×3 board the game is played on.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty(BOARD_SIZE)
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: Vector::from(vec![Cell::Empty; size * size]),
            remaining: size * size,
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn check(&self, coord: Coord) -> Result<usize> {
        if coord.in_bounds(self.size) {
            Ok(coord.index(self.size))
        } else {
            Err(EngineError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            })
        }
    }

    /// The cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` if `coord` is off the board.
    pub fn cell_at(&self, coord: Coord) -> Result<Cell> {
        let index = self.check(coord)?;
        Ok(self.cells[index])
    }

    /// Write `mark` into `coord` if that cell is empty.
    ///
    /// Returns `Ok(true)` when the mark was written and `Ok(false)` when the
    /// cell was already marked (the board is left untouched).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` if `coord` is off the board.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<bool> {
        let index = self.check(coord)?;
        if !self.cells[index].is_empty() {
            return Ok(false);
        }
        self.cells.set(index, Cell::Marked(mark));
        self.remaining -= 1;
        Ok(true)
    }

    /// A copy of this board with `mark` written at `coord`.
    ///
    /// The live board is not touched. If the cell is already marked the copy
    /// is identical to `self`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` if `coord` is off the board.
    pub fn with_placed(&self, coord: Coord, mark: Mark) -> Result<Self> {
        let mut snapshot = self.clone();
        snapshot.place(coord, mark)?;
        Ok(snapshot)
    }

    /// Whether placing `mark` at `coord` would complete a line for `mark`.
    ///
    /// Evaluated on a cloned snapshot; `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` if `coord` is off the board.
    pub fn wins_if_placed(&self, coord: Coord, mark: Mark) -> Result<bool> {
        Ok(self.with_placed(coord, mark)?.has_won(mark))
    }

    /// All empty coordinates in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| Coord::from_index(index, self.size))
            .collect()
    }

    #[must_use]
    pub fn remaining_empty_count(&self) -> usize {
        self.remaining
    }

    /// Number of marked cells.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.size * self.size - self.remaining
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }

    /// Whether some row, column, or main diagonal consists entirely of `mark`.
    ///
    /// Each line is scanned until the first cell that does not hold `mark`.
    /// O(N²) per call and correct for any N.
    #[must_use]
    pub fn has_won(&self, mark: Mark) -> bool {
        let size = self.size;
        all_lines(size).any(|line| {
            line.coords(size)
                .all(|coord| self.cells[coord.index(size)].holds(mark))
        })
    }

    /// The mark that has completed a line, if any.
    ///
    /// Checks `Mark::A` first; in legal play at most one mark can have a line.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        Mark::ALL.into_iter().find(|&mark| self.has_won(mark))
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Coord::from_index(index, size), *cell))
    }

    /// The grid as nested rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.cells[row * self.size + col]).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rows of symbols (`X`, `O`, `.`) separated by newlines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parse the `Display` format back into a board.
///
/// Rows are separated by newlines or `/`; whitespace is ignored. Accepts
/// `X`/`x`, `O`/`o`, and `.` or `_` for empty cells.
///
/// ```
/// use reverse_ttt::board::Board;
/// use reverse_ttt::core::Mark;
///
/// let board: Board = "XX./.O./...".parse().unwrap();
/// assert_eq!(board.placed_count(), 3);
/// assert!(board.wins_if_placed((0, 2).into(), Mark::A).unwrap());
/// ```
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(text: &str) -> Result<Self> {
        let rows: Vec<Vec<Cell>> = text
            .split(|c: char| c == '/' || c == '\n')
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.into_iter()
                    .map(|c| match c {
                        'X' | 'x' => Ok(Cell::Marked(Mark::A)),
                        'O' | 'o' => Ok(Cell::Marked(Mark::B)),
                        '.' | '_' => Ok(Cell::Empty),
                        other => Err(EngineError::MalformedBoard(format!(
                            "unexpected symbol {other:?}"
                        ))),
                    })
                    .collect()
            })
            .collect::<Result<_>>()?;

        let size = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != size) {
            return Err(EngineError::MalformedBoard(format!(
                "expected {size} cells per row, found {}",
                bad.len()
            )));
        }

        let mut board = Board::new(size)?;
        for (index, cell) in rows.into_iter().flatten().enumerate() {
            if let Cell::Marked(mark) = cell {
                board.place(Coord::from_index(index, size), mark)?;
            }
        }
        Ok(board)
    }
}
