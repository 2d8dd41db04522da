//! Board coordinates and the error raised when one cannot be played.
//!
//! An [`Action`] only names a cell. Whose mark lands there is decided by
//! the board it is applied to.

use crate::types::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate naming the cell to mark next.
///
/// Ordering is row-major, which is also the order the search visits
/// candidate moves in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Action {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 9 on-board coordinates in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Returns true if both coordinates are within 0..=2.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Human-readable name of the cell, if it is on the board.
    pub fn label(self) -> Option<&'static str> {
        let label = match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => return None,
        };
        Some(label)
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidActionKind {
    /// Row or column outside 0..=2.
    #[display("out of bounds")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("already occupied by {_0}")]
    Occupied(Player),
}

/// The requested coordinate does not name an empty cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid action {action}: cell is {kind}")]
pub struct InvalidAction {
    /// The rejected coordinate.
    pub action: Action,
    /// Why it was rejected.
    pub kind: InvalidActionKind,
}

impl InvalidAction {
    /// Creates a new invalid action error.
    pub fn new(action: Action, kind: InvalidActionKind) -> Self {
        Self { action, kind }
    }
}
