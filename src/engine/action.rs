//! Move actions and their rejection reasons.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::types::Mark;

/// A mark placement: the domain event the dispatcher validates and
/// applies. Computer- and human-originated moves go through the same
/// validation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The target cell.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why the dispatcher refused a move.
///
/// Every variant except [`MoveError::OutOfBounds`] is an expected
/// rejection: the state is left untouched and the session layer logs
/// it at debug level instead of surfacing a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Position),
    /// The game already has a terminal outcome.
    #[display("game is already over")]
    GameOver,
    /// It is the computer's turn; human input must not preempt it.
    #[display("waiting for the computer's move")]
    ComputerTurn,
    /// Cell index outside 0-8. Legitimate UI input enumerates cells
    /// 0-8 exactly, so this is a caller bug.
    #[display("cell index {} is out of bounds", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
