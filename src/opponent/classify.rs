//! Per-cell risk classification.
//!
//! Every empty cell lands in exactly one bucket, by what a one-ply look-ahead
//! says about it:
//!
//! | Bucket      | Human wins there | Opponent wins there |
//! |-------------|------------------|---------------------|
//! | `Safe`      | no               | no                  |
//! | `Defensive` | yes              | no                  |
//! | `Forced`    | either           | yes                 |
//!
//! A cell that completes a line for both sides is `Forced`, not `Defensive`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, Mark, Result};

/// Risk class of an empty cell, from the opponent's point of view.
///
/// Declared in selection priority order: `Safe` is preferred over
/// `Defensive`, which is preferred over `Forced`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bucket {
    /// Neither side completes a line here.
    Safe,
    /// Only the human would complete a line here; taking it blocks them.
    Defensive,
    /// The opponent's own mark would complete a line here.
    Forced,
}

/// Cells where placing `mark` would complete a line for `mark`.
///
/// Each candidate is tested on a cloned snapshot; `board` is not modified.
pub fn winning_cells(board: &Board, mark: Mark) -> Result<FxHashSet<Coord>> {
    let mut cells = FxHashSet::default();
    for coord in board.empty_cells() {
        if board.wins_if_placed(coord, mark)? {
            cells.insert(coord);
        }
    }
    Ok(cells)
}

/// Empty cells partitioned into buckets, each in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub safe: SmallVec<[Coord; 9]>,
    pub defensive: SmallVec<[Coord; 9]>,
    pub forced: SmallVec<[Coord; 9]>,
}

impl Classification {
    /// Classify every empty cell of `board`.
    pub fn of(board: &Board, human: Mark, opponent: Mark) -> Result<Self> {
        let human_wins = winning_cells(board, human)?;
        let opponent_wins = winning_cells(board, opponent)?;

        let mut classification = Self::default();
        for coord in board.empty_cells() {
            let bucket = match (human_wins.contains(&coord), opponent_wins.contains(&coord)) {
                (false, false) => Bucket::Safe,
                (true, false) => Bucket::Defensive,
                (_, true) => Bucket::Forced,
            };
            classification.bucket_mut(bucket).push(coord);
        }
        Ok(classification)
    }

    /// Cells in `bucket`.
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> &[Coord] {
        match bucket {
            Bucket::Safe => &self.safe,
            Bucket::Defensive => &self.defensive,
            Bucket::Forced => &self.forced,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut SmallVec<[Coord; 9]> {
        match bucket {
            Bucket::Safe => &mut self.safe,
            Bucket::Defensive => &mut self.defensive,
            Bucket::Forced => &mut self.forced,
        }
    }

    /// Bucket a cell was placed in, if it was classified at all.
    #[must_use]
    pub fn bucket_of(&self, coord: Coord) -> Option<Bucket> {
        [Bucket::Safe, Bucket::Defensive, Bucket::Forced]
            .into_iter()
            .find(|&bucket| self.bucket(bucket).contains(&coord))
    }

    /// The highest-priority non-empty bucket and its cells.
    ///
    /// `None` only when there were no empty cells to classify.
    #[must_use]
    pub fn best(&self) -> Option<(Bucket, &[Coord])> {
        [Bucket::Safe, Bucket::Defensive, Bucket::Forced]
            .into_iter()
            .map(|bucket| (bucket, self.bucket(bucket)))
            .find(|(_, cells)| !cells.is_empty())
    }

    /// Total number of classified cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.safe.len() + self.defensive.len() + self.forced.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_board_all_safe() {
        let c = Classification::of(&Board::standard(), Mark::A, Mark::B).unwrap();
        assert_eq!(c.safe.len(), 9);
        assert!(c.defensive.is_empty());
        assert!(c.forced.is_empty());
        assert_eq!(c.best().map(|(b, _)| b), Some(Bucket::Safe));
    }

    #[test]
    fn test_winning_cells() {
        let b = board("XX./O.O/...");
        let x: Vec<_> = winning_cells(&b, Mark::A).unwrap().into_iter().collect();
        assert_eq!(x, vec![Coord::new(0, 2)]);
        let o: Vec<_> = winning_cells(&b, Mark::B).unwrap().into_iter().collect();
        assert_eq!(o, vec![Coord::new(1, 1)]);
    }

    #[test]
    fn test_partition() {
        // human X threatens (0,2); opponent O threatens (1,1)
        let b = board("XX./O.O/...");
        let c = Classification::of(&b, Mark::A, Mark::B).unwrap();
        assert_eq!(c.bucket_of(Coord::new(0, 2)), Some(Bucket::Defensive));
        assert_eq!(c.bucket_of(Coord::new(1, 1)), Some(Bucket::Forced));
        assert_eq!(c.bucket_of(Coord::new(2, 2)), Some(Bucket::Safe));
        assert_eq!(c.bucket_of(Coord::new(0, 0)), None);
        assert_eq!(c.len(), b.remaining_empty_count());
    }

    #[test]
    fn test_double_threat_cell_is_forced() {
        // (1,1) completes the X diagonal and the O middle row
        let b = board("X../O.O/..X");
        let c = Classification::of(&b, Mark::A, Mark::B).unwrap();
        assert_eq!(c.bucket_of(Coord::new(1, 1)), Some(Bucket::Forced));
        assert!(c.defensive.is_empty());
    }

    #[test]
    fn test_best_priority() {
        // (1,2) is the last empty cell and completes the O middle row
        let b = board("XXO/OO./XOX");
        let c = Classification::of(&b, Mark::A, Mark::B).unwrap();
        let (bucket, cells) = c.best().unwrap();
        assert_eq!(bucket, Bucket::Forced);
        assert_eq!(cells, &[Coord::new(1, 2)]);
    }

    #[test]
    fn test_full_board_has_no_best() {
        let b = board("XOX/XOO/OXX");
        let c = Classification::of(&b, Mark::A, Mark::B).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.best(), None);
    }
}
