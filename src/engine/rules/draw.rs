//! Draw detection.

use tracing::instrument;

use super::super::types::{Board, Cell};

/// True when every cell is occupied.
///
/// A full board with no completed line is a draw; the composition
/// happens in [`evaluate`](super::evaluate).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}
