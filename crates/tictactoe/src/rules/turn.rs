//! Turn inference and legal-move enumeration.

use super::terminal::terminal;
use crate::{Action, Board, Player};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Returns the starting board: every cell empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who has the next turn, or `None` once the game is over.
///
/// X moves whenever both sides have the same number of marks, O otherwise.
/// Boards that break the turn-count invariant still get an answer by the
/// same rule, plus a warning.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn player(board: &Board) -> Option<Player> {
    if terminal(board) {
        return None;
    }
    if !board.is_valid() {
        warn!(
            x_count = board.count(Player::X),
            o_count = board.count(Player::O),
            "Board violates the turn-count invariant"
        );
    }
    Some(board.to_move())
}

/// Returns every empty coordinate on the board.
///
/// The set iterates in row-major order; the set is empty iff the board is
/// full.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(action, _)| action)
        .collect()
}
