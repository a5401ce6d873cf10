//! A playable session: one live round at a time.

use std::fmt;

use tracing::{debug, error, info, instrument};

use super::observer::StateObserver;
use super::snapshot::{Placement, SessionSnapshot};
use crate::board::Board;
use crate::core::{Coord, EngineError, Mark, RandomSource, Result, Role, SessionConfig};
use crate::opponent::{LoseSeekingOpponent, OpponentStrategy};
use crate::rules::{evaluate_after_placement, EndingMode, Outcome, RoundStatus};
use crate::turn::TurnController;

/// Why a submitted move was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    RoundFinished,
    NotHumanTurn,
    CellOccupied,
}

/// Result of a well-formed `submit_move` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The human's mark was placed. Holds every placement made by this call,
    /// the human's first, then any opponent replies.
    Accepted(Vec<Placement>),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// One human against the scripted opponent.
///
/// Owns the board, turn controller, RNG, and opponent strategy for the
/// current round; `start_round` replaces all round state. Sessions share
/// nothing, so any number can run side by side.
///
/// ## Synchronous replies
///
/// Each mutating call is a single transaction from the caller's side. When a
/// placement hands the turn to the opponent, the opponent's move is made
/// before the call returns, so callers only ever observe the human's turn or
/// a finished round.
pub struct GameSession {
    board: Board,
    turns: TurnController,
    status: RoundStatus,
    outcome: Option<Outcome>,
    ending_mode: EndingMode,
    history: Vec<Placement>,
    revision: u64,
    rng: Box<dyn RandomSource>,
    strategy: Box<dyn OpponentStrategy>,
    observers: Vec<Box<dyn StateObserver>>,
}

/// Builder for creating a GameSession.
pub struct GameSessionBuilder {
    config: SessionConfig,
    rng: Option<Box<dyn RandomSource>>,
    strategy: Box<dyn OpponentStrategy>,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            rng: None,
            strategy: Box::new(LoseSeekingOpponent),
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Use this random source instead of one built from the config.
    pub fn rng<R: RandomSource + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn strategy<S: OpponentStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    fn into_session(self) -> GameSession {
        let rng = match self.rng {
            Some(rng) => rng,
            None => {
                let rng = self.config.rng();
                debug!(seed = rng.seed(), "session rng seeded");
                Box::new(rng)
            }
        };
        GameSession {
            board: Board::standard(),
            turns: TurnController::default(),
            status: RoundStatus::Playing,
            outcome: None,
            ending_mode: EndingMode::Regular,
            history: Vec::new(),
            revision: 0,
            rng,
            strategy: self.strategy,
            observers: Vec::new(),
        }
    }

    /// Build the session and start its first round.
    ///
    /// # Errors
    ///
    /// Propagates opponent invariant violations from the opening move.
    pub fn build(self) -> Result<GameSession> {
        let mut session = self.into_session();
        session.start_round()?;
        Ok(session)
    }

    /// Build the session mid-round at a given position.
    ///
    /// The round is evaluated as if `board` had just been reached: a completed
    /// line or full board finishes it immediately, and if `turns` says the
    /// opponent is to move, it moves before this returns. No draws are taken
    /// for roles or first mover.
    ///
    /// # Errors
    ///
    /// Propagates opponent invariant violations from the opening move.
    pub fn build_at(self, board: Board, turns: TurnController) -> Result<GameSession> {
        let mut session = self.into_session();
        session.board = board;
        session.turns = turns;

        let opened = if let Some(mark) = session.board.winner() {
            session.finish(Outcome::Winner(mark));
            Ok(())
        } else if session.board.is_full() {
            session.finish(Outcome::Draw);
            Ok(())
        } else if session.turns.is_opponent_turn() {
            session.opponent_move()
        } else {
            Ok(())
        };
        session.notify();
        opened.map(|()| session)
    }
}

impl GameSession {
    /// Start building a session.
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// A session with the default opponent, configured by `config`, with its
    /// first round already started.
    ///
    /// # Errors
    ///
    /// Propagates opponent invariant violations from the opening move.
    pub fn new(config: SessionConfig) -> Result<Self> {
        GameSessionBuilder::new().config(config).build()
    }

    /// Register an observer; it is called after every mutating call.
    pub fn subscribe<O: StateObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Start a fresh round, discarding the previous one.
    ///
    /// Resets the board, draws roles then the first mover, clears the ending
    /// mode, and lets the opponent open if it won the first-mover draw.
    ///
    /// # Errors
    ///
    /// Propagates opponent invariant violations from the opening move.
    /// Observers are still notified, and the round must be restarted.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn start_round(&mut self) -> Result<()> {
        self.board = Board::standard();
        self.turns = TurnController::start(self.rng.as_mut());
        self.status = RoundStatus::Playing;
        self.outcome = None;
        self.ending_mode = EndingMode::Regular;
        self.history.clear();

        info!(
            human = %self.human_mark(),
            opponent = %self.opponent_mark(),
            first = %self.turns.current_role(),
            "round started"
        );

        let opened = if self.turns.is_opponent_turn() {
            self.opponent_move()
        } else {
            Ok(())
        };
        self.notify();
        opened
    }

    /// Submit the human's move at `(row, col)`.
    ///
    /// Ignored (not an error) when the round is finished, it is not the
    /// human's turn, or the cell is occupied. Otherwise the human's mark is
    /// placed, the round is evaluated, and the opponent replies before this
    /// returns if the turn passes to it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` for coordinates off the board, and
    /// propagates opponent invariant violations. After such a violation the
    /// placements made so far stay on the board, observers are notified, and
    /// the turn is left with the opponent, so every later click is ignored
    /// until `start_round` is called.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome> {
        let coord = Coord::new(row, col);
        let cell = self.board.cell_at(coord)?;

        let ignored = if self.status == RoundStatus::Finished {
            Some(IgnoreReason::RoundFinished)
        } else if !self.turns.is_human_turn() {
            Some(IgnoreReason::NotHumanTurn)
        } else if !cell.is_empty() {
            Some(IgnoreReason::CellOccupied)
        } else {
            None
        };

        if let Some(reason) = ignored {
            debug!(%coord, ?reason, "move ignored");
            self.notify();
            return Ok(MoveOutcome::Ignored(reason));
        }

        let first = self.history.len();
        let played = self.play(coord, Role::Human);
        self.notify();
        played?;
        Ok(MoveOutcome::Accepted(self.history[first..].to_vec()))
    }

    /// Let the opponent open from the current position.
    fn opponent_move(&mut self) -> Result<()> {
        let coord = self.opponent_turn()?;
        self.play(coord, Role::Opponent)
    }

    /// Place the current mark at `coord`, then keep resolving until the
    /// round ends or the human is to move.
    fn play(&mut self, mut coord: Coord, mut decided_by: Role) -> Result<()> {
        loop {
            let mark = self.turns.current_mark();
            if !self.board.place(coord, mark)? {
                error!(%coord, "opponent chose an occupied cell");
                return Err(EngineError::OpponentChoseOccupied(coord));
            }
            self.history.push(Placement {
                coord,
                mark,
                decided_by,
            });
            debug!(%coord, %mark, ?decided_by, "mark placed");

            if let Some(outcome) = evaluate_after_placement(&self.board, mark) {
                self.finish(outcome);
                return Ok(());
            }

            self.turns.advance();
            if !self.turns.is_opponent_turn() {
                return Ok(());
            }
            coord = self.opponent_turn()?;
            decided_by = Role::Opponent;
        }
    }

    /// Ask the strategy for a cell and apply any suicide relabel.
    fn opponent_turn(&mut self) -> Result<Coord> {
        let decision = self
            .strategy
            .decide(&self.board, self.turns.roles(), self.rng.as_mut())
            .map_err(|err| {
                error!(%err, board = %self.board, "opponent could not move");
                err
            })?;

        if decision.relabel {
            self.ending_mode = EndingMode::Suicide;
            self.turns.advance();
            info!(coord = %decision.coord, "opponent hands its winning move to the human");
        }
        Ok(decision.coord)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = RoundStatus::Finished;
        self.outcome = Some(outcome);
        info!(?outcome, ending_mode = ?self.ending_mode, "round finished");
    }

    fn notify(&mut self) {
        self.revision += 1;
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.state_changed(&snapshot);
        }
    }

    // === Read-only accessors ===

    /// Owned copy of everything the UI renders.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            revision: self.revision,
            board: self.board.clone(),
            status: self.status,
            outcome: self.outcome,
            ending_mode: self.ending_mode,
            human: self.human_mark(),
            opponent: self.opponent_mark(),
            current: self.current_mark(),
            history: self.history.clone(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Winner or draw, once the round is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn ending_mode(&self) -> EndingMode {
        self.ending_mode
    }

    #[must_use]
    pub fn human_mark(&self) -> Mark {
        self.turns.roles().human()
    }

    #[must_use]
    pub fn opponent_mark(&self) -> Mark {
        self.turns.roles().opponent()
    }

    #[must_use]
    pub fn current_mark(&self) -> Mark {
        self.turns.current_mark()
    }

    #[must_use]
    pub fn turns(&self) -> &TurnController {
        &self.turns
    }

    /// Placements made this round, in order.
    #[must_use]
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Number of mutating calls so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    /// Whether a "play again" action should be offered.
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.is_finished()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("turns", &self.turns)
            .field("status", &self.status)
            .field("outcome", &self.outcome)
            .field("ending_mode", &self.ending_mode)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
