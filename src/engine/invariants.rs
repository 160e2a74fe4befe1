//! First-class invariants of the game state machine.
//!
//! Invariants are logical properties that hold for every state the
//! dispatcher can produce. They are testable independently and checked
//! with debug assertions after every accepted move.

use tracing::warn;

use super::state::GameState;
use super::types::Mark;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation {
                description: I1::description().to_string(),
            });
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation {
                description: I2::description().to_string(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: marks strictly alternate starting with X, so X's count
/// equals O's count or exceeds it by exactly one.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X's count equals O's count or exceeds it by one"
    }
}

/// Invariant: the mark to move is determined by the counts. X moves
/// when they are equal, O when X leads by one.
pub struct TurnParity;

impl Invariant<GameState> for TurnParity {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        match state.next_mark() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "the mark to move matches the parity of placed marks"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (MarkBalance, TurnParity);

/// Checks all invariants, logging and debug-asserting on violation.
pub(crate) fn assert_invariants(state: &GameState) {
    if let Err(violations) = GameInvariants::check_all(state) {
        for violation in &violations {
            warn!(description = %violation.description, "invariant violated");
        }
        debug_assert!(
            false,
            "game invariants violated: {} issue(s)",
            violations.len()
        );
    }
}
