//! Opponent move selection.
//!
//! Strategies are trait-based so a session can be driven by a different
//! opponent in tests or harnesses. The game's own opponent is
//! [`LoseSeekingOpponent`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::classify::{Bucket, Classification};
use crate::board::Board;
use crate::core::{in_suicide_band, Coord, EngineError, RandomSource, Result};
use crate::turn::RoleAssignment;

/// What the opponent wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentDecision {
    /// Cell to mark.
    pub coord: Coord,
    /// Bucket the cell was drawn from.
    pub bucket: Bucket,
    /// Hand the turn to the human before placing, so the human's mark is
    /// written instead of the opponent's.
    pub relabel: bool,
}

/// Policy for choosing the opponent's move.
pub trait OpponentStrategy: Send + Sync {
    /// Choose a cell on `board` for the opponent.
    ///
    /// `board` is the live board and must not be modified; look-ahead works
    /// on clones.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoEmptyCells` when called on a full board. The
    /// session never does this; seeing it means the end-of-move check above
    /// the strategy was skipped.
    fn decide(
        &self,
        board: &Board,
        roles: RoleAssignment,
        rng: &mut dyn RandomSource,
    ) -> Result<OpponentDecision>;
}

/// Single-ply opponent that tries to lose.
///
/// Prefers a cell where nobody completes a line, then a cell that blocks the
/// human, and only when cornered a cell that completes its own line. When
/// cornered it usually relabels the move as the human's (the suicide
/// deviation): one draw `r`, relabel iff `0.05 < r < 0.95`.
///
/// Draws consumed per decision: one tie-break draw, plus one threshold draw
/// when the choice came from the `Forced` bucket.
#[derive(Clone, Debug, Default)]
pub struct LoseSeekingOpponent;

impl OpponentStrategy for LoseSeekingOpponent {
    #[instrument(level = "debug", skip_all, fields(opponent = %roles.opponent()))]
    fn decide(
        &self,
        board: &Board,
        roles: RoleAssignment,
        rng: &mut dyn RandomSource,
    ) -> Result<OpponentDecision> {
        let classification = Classification::of(board, roles.human(), roles.opponent())?;
        debug!(
            safe = classification.safe.len(),
            defensive = classification.defensive.len(),
            forced = classification.forced.len(),
            "cells classified"
        );

        let (bucket, cells) = classification.best().ok_or(EngineError::NoEmptyCells)?;
        let coord = cells[rng.pick_index(cells.len())];

        let relabel = if bucket == Bucket::Forced {
            let draw = rng.next_unit();
            let relabel = in_suicide_band(draw);
            info!(%coord, draw, relabel, "opponent cornered");
            relabel
        } else {
            false
        };

        debug!(%coord, ?bucket, relabel, "opponent decided");
        Ok(OpponentDecision {
            coord,
            bucket,
            relabel,
        })
    }
}
