//! Naive random computer opponent.
//!
//! Picks uniformly among empty cells. No lookahead and no heuristic;
//! intentionally naive.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::instrument;

use crate::engine::{Board, Position};

/// Selects the computer's move: a uniformly random empty cell.
///
/// Returns `None` on a full board; evaluation already reports such a
/// board as terminal, so the selector is not expected to be invoked
/// for one.
#[instrument(skip(board))]
pub fn select_computer_move(board: &Board) -> Option<Position> {
    let ref mut rng = rand::rng();
    select_computer_move_with(board, rng)
}

/// RNG-explicit variant of [`select_computer_move`] so callers and
/// tests can seed the choice.
pub fn select_computer_move_with<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Option<Position> {
    Position::empty_cells(board).choose(rng).copied()
}
