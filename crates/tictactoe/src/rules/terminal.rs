//! Game-over detection and scoring.

use super::win::winner;
use crate::Board;
use tracing::instrument;

/// Returns true if a line is complete or no empty cell remains.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores the board from X's perspective: `1` if X won, `-1` if O won,
/// `0` otherwise.
///
/// A non-terminal board also scores `0`; check [`terminal`] first.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn utility(board: &Board) -> i8 {
    winner(board).map_or(0, |player| player.sign())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_terminal() {
        assert!(!terminal(&Board::new()));
        assert_eq!(utility(&Board::new()), 0);
    }

    #[test]
    fn test_partial_board_not_terminal() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert!(!terminal(&board));
    }

    #[test]
    fn test_win_is_terminal_before_board_fills() {
        let board: Board = "OOO/XX./X..".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_x_win_scores_one() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(utility(&board), 1);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_win_on_full_board() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), 1);
    }
}
