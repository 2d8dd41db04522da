//! Immediate-threat detection.
//!
//! A threat is a line holding two marks of one side and an empty third
//! cell: that side wins on its next move unless the cell gets filled.

use crate::rules::win::{LINES, cells};
use crate::{Action, Board, Cell, Player};
use tracing::instrument;

/// Returns the cell that would let `side` complete a line on its next move.
///
/// Lines are scanned in [`LINES`] order and the first threat found is
/// reported.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn impending_winner(board: &Board, side: Player) -> Option<Action> {
    LINES.iter().find_map(|line| {
        let line_cells = cells(board, line);
        let marks = line_cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(side))
            .count();
        if marks != 2 {
            return None;
        }
        line.iter()
            .zip(line_cells)
            .find(|(_, cell)| cell.is_empty())
            .map(|(action, _)| *action)
    })
}
