//! Game outcomes and the status projection.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::state::GameState;
use super::types::Mark;

/// One of the 8 straight lines that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// All winning lines in evaluation priority order: rows, then
    /// columns, then diagonals.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ]),
        Line([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line, in board order.
    pub fn positions(self) -> [Position; 3] {
        self.0
    }

    /// Cell indices of the three positions.
    pub fn indices(self) -> [usize; 3] {
        let [a, b, c] = self.0;
        [a.index(), b.index(), c.index()]
    }

    /// True when the position lies on this line.
    pub fn contains(self, position: Position) -> bool {
        self.0.contains(&position)
    }
}

/// Evaluated status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// True when the game can no longer accept moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Projects state and outcome into the status label shown to the player.
///
/// The mapping is pure and stateless; the presentation layer may
/// reimplement it as long as it follows the same outcome-to-label rule.
pub fn status_label(state: &GameState, outcome: &Outcome) -> String {
    match outcome {
        Outcome::InProgress => format!("Current: {}", state.next_mark()),
        Outcome::Won { mark, .. } => format!("Winner: {}", mark),
        Outcome::Draw => "It's a Draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::Mode;

    #[test]
    fn line_indices_follow_board_order() {
        assert_eq!(Line::ALL[0].indices(), [0, 1, 2]);
        assert_eq!(Line::ALL[3].indices(), [0, 3, 6]);
        assert_eq!(Line::ALL[6].indices(), [0, 4, 8]);
        assert_eq!(Line::ALL[7].indices(), [2, 4, 6]);
    }

    #[test]
    fn status_labels_match_outcome() {
        let state = GameState::new(Mode::HumanVsHuman);
        assert_eq!(
            status_label(&state, &Outcome::InProgress),
            "Current: X"
        );
        assert_eq!(
            status_label(
                &state,
                &Outcome::Won {
                    mark: Mark::O,
                    line: Line::ALL[0],
                }
            ),
            "Winner: O"
        );
        assert_eq!(status_label(&state, &Outcome::Draw), "It's a Draw!");
    }
}
