//! Tic-tac-toe game engine with a naive random computer opponent.
//!
//! The engine is a small state machine: a 3x3 [`Board`], a pure
//! [`evaluate`] function computing the [`Outcome`] of any snapshot,
//! and a dispatcher ([`apply_move`]) that validates and applies marks
//! for both players. A [`GameSession`] wraps the engine for
//! interactive use: it schedules the delayed computer reply, cancels
//! it on reset, and relays events to the presentation layer.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{apply_move, evaluate, new_game, Mode, Outcome};
//!
//! let state = new_game(Mode::HumanVsHuman);
//! let applied = apply_move(&state, 4, None).expect("index 4 is in bounds");
//! assert_eq!(applied.outcome, Outcome::InProgress);
//! assert_eq!(evaluate(applied.state.board()), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod opponent;
mod schedule;
mod session;
mod settings;

// Crate-level exports - Engine
pub use engine::{
    apply_move, evaluate, is_full, new_game, status_label, winning_line, Board, Cell,
    GameInvariants, GameState, Invariant, InvariantSet, InvariantViolation, Line, Mark,
    MarkBalance, Mode, Move, MoveError, MoveOutcome, Outcome, Position, TurnParity,
};

// Crate-level exports - Computer opponent
pub use opponent::{select_computer_move, select_computer_move_with};

// Crate-level exports - Deferred scheduling
pub use schedule::{schedule_reply, ComputerReply, ScheduledMove};

// Crate-level exports - Session driver
pub use session::{GameSession, SessionEvent};

// Crate-level exports - Settings
pub use settings::{SessionSettings, Theme, DEFAULT_REPLY_DELAY};
