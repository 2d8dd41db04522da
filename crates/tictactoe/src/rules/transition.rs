//! Applying an action to a board.

use super::turn::actions;
use crate::{Action, Board, Cell, InvalidAction, InvalidActionKind};
use tracing::instrument;

/// Returns the board that results from marking `action` on `board`.
///
/// The mark belongs to the side to move on the input board by mark
/// counting ([`Board::to_move`]). The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction`] if the coordinate is off the board or the
/// cell already holds a mark.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    match board.get(action) {
        None => Err(InvalidAction::new(action, InvalidActionKind::OutOfBounds)),
        Some(Cell::Occupied(player)) => Err(InvalidAction::new(
            action,
            InvalidActionKind::Occupied(player),
        )),
        Some(Cell::Empty) => Ok(board.with_mark(action, board.to_move())),
    }
}

/// Every legal action paired with the board it leads to, in row-major order.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mover = board.to_move();
    actions(board)
        .into_iter()
        .map(move |action| (action, board.with_mark(action, mover)))
}
