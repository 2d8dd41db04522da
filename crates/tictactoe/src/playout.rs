//! Playing whole games with the rules engine.
//!
//! [`self_play`] lets [`minimax`] choose for both sides until the game
//! ends; [`replay`] rebuilds a board from a list of actions.

use crate::rules::{initial_state, player, result, winner};
use crate::search::minimax;
use crate::{Action, Board, InvalidAction, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One move of a played-out game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    /// The side that moved.
    pub player: Player,
    /// Where it moved.
    pub action: Action,
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.action.label() {
            Some(label) => write!(f, "{} -> {} {}", self.player, self.action, label),
            None => write!(f, "{} -> {}", self.player, self.action),
        }
    }
}

/// A game played from some start board to a terminal board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playout {
    start: Board,
    plies: Vec<Ply>,
    end: Board,
}

impl Playout {
    /// Board the game started from.
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Moves made, in order.
    pub fn plies(&self) -> &[Ply] {
        &self.plies
    }

    /// Final, terminal board.
    pub fn end(&self) -> &Board {
        &self.end
    }

    /// How the game ended.
    pub fn outcome(&self) -> Outcome {
        winner(&self.end).map_or(Outcome::Draw, Outcome::Winner)
    }

    /// Utility of the final board.
    pub fn utility(&self) -> i8 {
        crate::rules::utility(&self.end)
    }
}

/// Plays optimal moves for both sides from `board` until the game is over.
///
/// A terminal `board` yields a playout with no plies.
///
/// # Errors
///
/// Returns [`InvalidAction`] if the search proposes a move the rules reject.
#[instrument(skip(board), fields(board = %board))]
pub fn self_play(board: &Board) -> Result<Playout, InvalidAction> {
    let mut current = *board;
    let mut plies = Vec::new();

    while let Some(side) = player(&current) {
        let Some(action) = minimax(&current) else {
            break;
        };
        current = result(&current, action)?;
        debug!(player = %side, action = %action, board = %current, "Ply played");
        plies.push(Ply {
            player: side,
            action,
        });
    }

    let playout = Playout {
        start: *board,
        plies,
        end: current,
    };
    info!(
        plies = playout.plies.len(),
        outcome = %playout.outcome(),
        "Self-play finished"
    );
    Ok(playout)
}

/// Rebuilds the board reached by playing `actions` from the initial state.
///
/// # Errors
///
/// Returns the first [`InvalidAction`] encountered.
#[instrument]
pub fn replay(actions: &[Action]) -> Result<Board, InvalidAction> {
    actions
        .iter()
        .try_fold(initial_state(), |board, action| result(&board, *action))
}
