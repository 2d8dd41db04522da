//! Tic-tac-toe rules engine with exhaustive minimax search.
//!
//! The whole crate works on [`Board`], a small `Copy` value. The rules are
//! free functions: ask whose turn it is, list the legal actions, apply one,
//! and check whether the game is over.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Action, Player, initial_state, minimax, player, result, terminal};
//!
//! # fn main() -> Result<(), tictactoe::InvalidAction> {
//! let board = initial_state();
//! assert_eq!(player(&board), Some(Player::X));
//!
//! let board = result(&board, Action::new(1, 1))?;
//! assert!(!terminal(&board));
//!
//! // Against a center opening the search answers in a corner.
//! let reply = minimax(&board).expect("game is not over");
//! assert_eq!(reply, Action::new(0, 0));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod playout;
mod rules;
mod search;
mod types;

// Crate-level exports - Data model
pub use action::{Action, InvalidAction, InvalidActionKind};
pub use types::{Board, BoardParseError, Cell, Player};

// Crate-level exports - Rules
pub use rules::{LINES, Line, actions, initial_state, player, result, terminal, utility, winner};

// Crate-level exports - Search
pub use search::{SearchStats, Shortcut, impending_winner, minimax, minimax_with_stats, value};

// Crate-level exports - Self-play
pub use playout::{Outcome, Playout, Ply, replay, self_play};
