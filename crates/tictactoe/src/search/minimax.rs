//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. The full game tree is walked
//! with no pruning and no caching; from the empty board that is a little
//! over half a million nodes.

use super::threat::impending_winner;
use crate::rules::transition::successors;
use crate::rules::{player, terminal, utility};
use crate::{Action, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Forcing move taken instead of a full sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Shortcut {
    /// The mover completes one of their own lines.
    #[display("win")]
    Win,
    /// The mover fills the cell the opponent needs to complete a line.
    #[display("block")]
    Block,
}

/// Bookkeeping from a single [`minimax_with_stats`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated by the recursive sweep.
    pub nodes: u64,
    /// Set when a forcing move answered the search.
    pub shortcut: Option<Shortcut>,
}

#[derive(Debug, Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn max_value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }
        successors(board)
            .map(|(_, next)| self.min_value(&next))
            .max()
            .unwrap_or_else(|| utility(board))
    }

    fn min_value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }
        successors(board)
            .map(|(_, next)| self.max_value(&next))
            .min()
            .unwrap_or_else(|| utility(board))
    }

    /// Value of `board` with `side` to move.
    fn value_for(&mut self, board: &Board, side: Player) -> i8 {
        match side {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }
}

/// Returns the game-theoretic value of the board under optimal play.
///
/// Terminal boards score their [`utility`].
#[instrument(skip(board), fields(board = %board))]
pub fn value(board: &Board) -> i8 {
    Searcher::default().value_for(board, board.to_move())
}

/// Returns the optimal action for the player to move, or `None` if the game
/// is over.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Action> {
    let (action, stats) = minimax_with_stats(board);
    debug!(
        action = ?action,
        nodes = stats.nodes,
        shortcut = ?stats.shortcut,
        "Search finished"
    );
    action
}

/// Same as [`minimax`], also reporting how the answer was found.
///
/// A mover who can complete a line does so; otherwise a mover facing an
/// opponent threat blocks it. Both moves are always optimal, so these only
/// decide which of several equally good moves gets reported. Everything else
/// goes through the full sweep, visiting candidates in row-major order and
/// keeping the first one whose value is strictly better than the best so far.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_with_stats(board: &Board) -> (Option<Action>, SearchStats) {
    let mut stats = SearchStats::default();
    let Some(mover) = player(board) else {
        return (None, stats);
    };

    if let Some(action) = impending_winner(board, mover) {
        stats.shortcut = Some(Shortcut::Win);
        return (Some(action), stats);
    }
    if let Some(action) = impending_winner(board, mover.opponent()) {
        stats.shortcut = Some(Shortcut::Block);
        return (Some(action), stats);
    }

    let mut searcher = Searcher::default();
    let mut best: Option<(Action, i8)> = None;
    for (action, next) in successors(board) {
        let score = searcher.value_for(&next, mover.opponent());
        let improves = match best {
            None => true,
            Some((_, best_score)) => match mover {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if improves {
            best = Some((action, score));
        }
    }

    stats.nodes = searcher.nodes;
    (best.map(|(action, _)| action), stats)
}
