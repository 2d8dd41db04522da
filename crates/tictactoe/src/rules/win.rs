//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Cell, Player};
use tracing::instrument;

/// Three coordinates that win the game when they all hold the same mark.
pub type Line = [Action; 3];

/// Every winning line, in scan order: rows, columns, main diagonal,
/// anti-diagonal.
///
/// Both [`winner`] and [`crate::impending_winner`] walk this table front to
/// back and stop at the first match, so the order decides which line is
/// reported when more than one qualifies.
pub const LINES: [Line; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(2, 0), Action::new(1, 1), Action::new(0, 2)],
];

/// Returns the cells of a line as read from the board.
pub(crate) fn cells(board: &Board, line: &Line) -> [Cell; 3] {
    line.map(|action| board.get(action).unwrap_or(Cell::Empty))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first fully marked line in [`LINES`]
/// order, `None` otherwise.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| match cells(board, line) {
        [Cell::Occupied(a), Cell::Occupied(b), Cell::Occupied(c)] if a == b && b == c => Some(a),
        _ => None,
    })
}
