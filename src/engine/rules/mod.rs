//! Board evaluation rules.
//!
//! Pure functions computing the outcome of a board snapshot. Win and
//! draw detection are separated so each rule is testable on its own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use tracing::instrument;

use super::outcome::Outcome;
use super::types::Board;

/// Evaluates a board snapshot.
///
/// The win check runs before the draw check, so a full board that also
/// contains a completed line reports the win. Deterministic, callable
/// on any 9-cell configuration.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Won { mark, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::position::Position;
    use crate::engine::types::{Cell, Mark};

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn win_takes_priority_over_draw_on_full_board() {
        // X X X / O O X / O X O
        let marks = [
            Mark::X,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.set(
                Position::from_index(index).expect("index in range"),
                Cell::Marked(mark),
            );
        }

        match evaluate(&board) {
            Outcome::Won { mark, line } => {
                assert_eq!(mark, Mark::X);
                assert_eq!(line.indices(), [0, 1, 2]);
            }
            other => panic!("expected win, got {other:?}"),
        }
    }
}
