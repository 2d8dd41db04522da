//! Core domain types for tic-tac-toe.

use crate::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a win for this player, from X's perspective.
    pub fn sign(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player whose mark occupies the cell.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol used by the board text format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a single symbol of the board text format.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '_' | '-' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::Occupied(Player::X)),
            'o' | 'O' => Some(Cell::Occupied(Player::O)),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain value: it is `Copy`, and [`result`](crate::result)
/// returns a fresh board instead of touching its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// No turn-count check is made, so this can express positions that
    /// alternating play never reaches. See [`Board::is_valid`].
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given coordinate, or `None` if out of range.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells.get(action.row)?.get(action.col).copied()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates every coordinate with its cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, Cell)> + '_ {
        Action::ALL
            .into_iter()
            .map(move |action| (action, self.cells[action.row][action.col]))
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.iter().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.occupied() == 9
    }

    /// Checks the turn-count invariant: X has as many marks as O, or one more.
    pub fn is_valid(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Side to move by mark counting alone, ignoring whether the game is over.
    ///
    /// Equal counts mean X moves; anything else means O moves.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns a copy of this board with `player`'s mark at `action`.
    ///
    /// Callers must have checked that `action` is in range.
    pub(crate) fn with_mark(&self, action: Action, player: Player) -> Self {
        let mut next = *self;
        next.cells[action.row][action.col] = Cell::Occupied(player);
        next
    }

    /// Formats the board as a human-readable grid.
    pub fn pretty(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                result.push(match cell {
                    Cell::Empty => ' ',
                    Cell::Occupied(_) => cell.symbol(),
                });
                if c < 2 {
                    result.push('|');
                }
            }
            if r < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing the `XOX/XOX/O.O` board text format.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of `/`-separated rows.
    #[display("expected 3 rows separated by '/', found {found}")]
    RowCount {
        /// Rows found in the input.
        found: usize,
    },
    /// A row without exactly three cells.
    #[display("row {row} has {found} cells, expected 3")]
    ColumnCount {
        /// Zero-based row index.
        row: usize,
        /// Cells found in that row.
        found: usize,
    },
    /// A character that is not a mark or an empty marker.
    #[display("unknown cell symbol {symbol:?}")]
    Symbol {
        /// The offending character.
        symbol: char,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let rows: Vec<&str> = compact.split('/').collect();
        if rows.len() != 3 {
            return Err(BoardParseError::RowCount { found: rows.len() });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != 3 {
                return Err(BoardParseError::ColumnCount {
                    row: r,
                    found: symbols.len(),
                });
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                cells[r][c] = Cell::from_symbol(symbol).ok_or(BoardParseError::Symbol { symbol })?;
            }
        }

        Ok(Self::from_rows(cells))
    }
}
