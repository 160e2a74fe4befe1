//! Game state and play modes.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::types::{Board, Cell, Mark};

/// Who plays the O mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    HumanVsHuman,
    /// O is played by the random computer opponent.
    HumanVsComputer,
}

impl Mode {
    /// The computer-controlled mark in this mode, if any.
    pub fn computer_mark(self) -> Option<Mark> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsComputer => Some(Mark::O),
        }
    }

    /// Display label for mode selectors.
    pub fn label(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsComputer => "Human vs Computer",
        }
    }
}

/// Complete state of one game: the grid, whose turn it is, and the
/// play mode.
///
/// Created by [`new_game`](crate::new_game), advanced only through the
/// dispatcher, and replaced wholesale on reset; never partially rolled
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    next_mark: Mark,
    mode: Mode,
}

impl GameState {
    /// Creates a fresh state: empty board, X to move.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            mode,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// The play mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True when the mark that moves next is computer-controlled.
    pub fn is_computer_turn(&self) -> bool {
        self.mode.computer_mark() == Some(self.next_mark)
    }

    /// Successor state with `mark` written at `position` and the turn
    /// flipped.
    pub(crate) fn with_move(&self, position: Position, mark: Mark) -> Self {
        let mut board = self.board.clone();
        board.set(position, Cell::Marked(mark));
        Self {
            board,
            next_mark: mark.other(),
            mode: self.mode,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
