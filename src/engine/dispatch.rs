//! Move validation and application.
//!
//! The dispatcher is the only way a [`GameState`] advances. It
//! validates a move, writes the mark, flips the turn, and recomputes
//! the outcome as an explicit post-condition, so callers never observe
//! a state and an outcome that disagree.

use tracing::{debug, instrument};

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::outcome::Outcome;
use super::position::Position;
use super::rules::evaluate;
use super::state::{GameState, Mode};
use super::types::Mark;

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Successor state.
    pub state: GameState,
    /// Freshly computed outcome of the successor state.
    pub outcome: Outcome,
    /// True when the caller should schedule a delayed computer reply:
    /// the mode is human-vs-computer, the game continues, and it is
    /// now the computer's turn.
    pub schedule_computer_move: bool,
}

/// Creates the state for a fresh game in the given mode.
///
/// Mode changes are resets: switching modes always restarts the game
/// with 9 empty cells and X to move.
#[instrument]
pub fn new_game(mode: Mode) -> GameState {
    GameState::new(mode)
}

/// Validates and applies a move at cell `index`, leaving the caller's
/// state untouched on rejection.
///
/// `mark` is supplied only for computer-originated moves, so the
/// dispatcher places O on the computer's behalf regardless of whose
/// turn bookkeeping triggered it. Human input passes `None` and plays
/// whichever mark is up next.
///
/// # Errors
///
/// [`MoveError::OutOfBounds`] when `index` is not in 0-8. The other
/// variants (occupied cell, terminal game, computer's turn) are
/// expected rejections that leave the game unchanged.
#[instrument(skip(state))]
pub fn apply_move(
    state: &GameState,
    index: usize,
    mark: Option<Mark>,
) -> Result<MoveOutcome, MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if evaluate(state.board()).is_terminal() {
        return Err(MoveError::GameOver);
    }
    if !state.board().is_empty(position) {
        return Err(MoveError::CellOccupied(position));
    }
    if mark.is_none() && state.is_computer_turn() {
        return Err(MoveError::ComputerTurn);
    }

    let action = Move::new(mark.unwrap_or_else(|| state.next_mark()), position);
    let next = state.with_move(action.position, action.mark);
    let outcome = evaluate(next.board());
    assert_invariants(&next);

    let schedule_computer_move = outcome == Outcome::InProgress && next.is_computer_turn();
    debug!(%action, ?outcome, schedule_computer_move, "move applied");

    Ok(MoveOutcome {
        state: next,
        outcome,
        schedule_computer_move,
    })
}
