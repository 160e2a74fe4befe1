//! The game engine: board state, outcome evaluation, move dispatch.

mod action;
mod dispatch;
mod invariants;
mod outcome;
mod position;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use dispatch::{apply_move, new_game, MoveOutcome};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance, TurnParity,
};
pub use outcome::{status_label, Line, Outcome};
pub use position::Position;
pub use rules::{evaluate, is_full, winning_line};
pub use state::{GameState, Mode};
pub use types::{Board, Cell, Mark};
