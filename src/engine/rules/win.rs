//! Win detection.

use tracing::instrument;

use super::super::outcome::Line;
use super::super::types::{Board, Cell, Mark};

/// Returns the first completed line and the mark that owns it, if any.
///
/// Lines are checked in the fixed order of [`Line::ALL`]; the first
/// match wins.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    for line in Line::ALL {
        let [a, b, c] = line.positions();
        if let Cell::Marked(mark) = board.get(a)
            && board.get(b) == Cell::Marked(mark)
            && board.get(c) == Cell::Marked(mark)
        {
            return Some((mark, line));
        }
    }

    None
}
