//! Role binding and the turn pointer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Mark, RandomSource, Role};

/// Which mark each role plays for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleAssignment {
    human: Mark,
}

impl RoleAssignment {
    /// Bind the human to `human`; the opponent gets the other mark.
    #[must_use]
    pub const fn with_human(human: Mark) -> Self {
        Self { human }
    }

    #[must_use]
    pub const fn human(&self) -> Mark {
        self.human
    }

    #[must_use]
    pub const fn opponent(&self) -> Mark {
        self.human.other()
    }

    /// The mark bound to `role`.
    #[must_use]
    pub const fn mark_of(&self, role: Role) -> Mark {
        match role {
            Role::Human => self.human(),
            Role::Opponent => self.opponent(),
        }
    }

    /// The role playing `mark`.
    #[must_use]
    pub fn role_of(&self, mark: Mark) -> Role {
        if mark == self.human {
            Role::Human
        } else {
            Role::Opponent
        }
    }
}

impl Default for RoleAssignment {
    fn default() -> Self {
        Self::with_human(Mark::A)
    }
}

/// Tracks the role binding and whose mark moves next.
///
/// `advance` is a pure toggle; it never looks at the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    roles: RoleAssignment,
    current: Mark,
}

impl TurnController {
    /// Create a controller with a fixed binding and first mover.
    #[must_use]
    pub const fn new(roles: RoleAssignment, current: Mark) -> Self {
        Self { roles, current }
    }

    /// Fresh controller for a new round: roles first, then the first mover.
    ///
    /// Consumes exactly two draws from `rng`.
    pub fn start(rng: &mut dyn RandomSource) -> Self {
        let mut turns = Self::default();
        turns.assign_roles(rng);
        turns.pick_initial_turn(rng);
        turns
    }

    /// Bind human and opponent to the two marks with a fair coin.
    ///
    /// A draw of at least 0.5 gives the human `Mark::A`.
    pub fn assign_roles(&mut self, rng: &mut dyn RandomSource) {
        let human = if rng.coin() { Mark::A } else { Mark::B };
        self.roles = RoleAssignment::with_human(human);
        debug!(human = %human, opponent = %self.roles.opponent(), "roles assigned");
    }

    /// Pick the first mover with a fair coin.
    ///
    /// A draw of at least 0.5 lets the human move first.
    pub fn pick_initial_turn(&mut self, rng: &mut dyn RandomSource) {
        let first = if rng.coin() { Role::Human } else { Role::Opponent };
        self.current = self.roles.mark_of(first);
        debug!(first = %first, mark = %self.current, "initial turn picked");
    }

    #[must_use]
    pub fn roles(&self) -> RoleAssignment {
        self.roles
    }

    #[must_use]
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Role of the mark whose turn it is.
    #[must_use]
    pub fn current_role(&self) -> Role {
        self.roles.role_of(self.current)
    }

    /// Hand the turn to the other mark.
    pub fn advance(&mut self) {
        self.current = self.current.other();
    }

    #[must_use]
    pub fn is_opponent_turn(&self) -> bool {
        self.current_role() == Role::Opponent
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.current_role() == Role::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    #[test]
    fn test_role_assignment() {
        let roles = RoleAssignment::with_human(Mark::B);
        assert_eq!(roles.human(), Mark::B);
        assert_eq!(roles.opponent(), Mark::A);
        assert_eq!(roles.mark_of(Role::Opponent), Mark::A);
        assert_eq!(roles.role_of(Mark::B), Role::Human);
        assert_eq!(roles.role_of(Mark::A), Role::Opponent);
    }

    #[test]
    fn test_assign_roles_uses_coin() {
        let mut rng = ScriptedRng::new([0.7, 0.2]);
        let mut turns = TurnController::default();

        turns.assign_roles(&mut rng);
        assert_eq!(turns.roles().human(), Mark::A);

        turns.assign_roles(&mut rng);
        assert_eq!(turns.roles().human(), Mark::B);
    }

    #[test]
    fn test_start_draw_order() {
        // roles: 0.1 -> human B; first mover: 0.9 -> human
        let mut rng = ScriptedRng::new([0.1, 0.9]);
        let turns = TurnController::start(&mut rng);
        assert_eq!(rng.consumed(), 2);
        assert_eq!(turns.roles().human(), Mark::B);
        assert_eq!(turns.current_mark(), Mark::B);
        assert!(turns.is_human_turn());

        // roles: 0.6 -> human A; first mover: 0.3 -> opponent
        let mut rng = ScriptedRng::new([0.6, 0.3]);
        let turns = TurnController::start(&mut rng);
        assert_eq!(turns.roles().human(), Mark::A);
        assert_eq!(turns.current_mark(), Mark::B);
        assert!(turns.is_opponent_turn());
    }

    #[test]
    fn test_advance_toggles() {
        let mut turns = TurnController::new(RoleAssignment::with_human(Mark::A), Mark::A);
        assert!(turns.is_human_turn());

        turns.advance();
        assert_eq!(turns.current_mark(), Mark::B);
        assert!(turns.is_opponent_turn());
        assert_eq!(turns.current_role(), Role::Opponent);

        turns.advance();
        assert_eq!(turns.current_mark(), Mark::A);
        assert_eq!(turns.roles().human(), Mark::A);
    }
}
