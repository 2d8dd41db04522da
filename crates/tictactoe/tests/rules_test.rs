//! Tests for the tic-tac-toe rules engine.

use tictactoe::{
    Action, Board, Cell, InvalidActionKind, LINES, Player, actions, initial_state, player, result,
    terminal, utility, winner,
};

const X: Cell = Cell::Occupied(Player::X);
const O: Cell = Cell::Occupied(Player::O);
const E: Cell = Cell::Empty;

#[test]
fn test_initial_state_is_empty() {
    let board = initial_state();
    assert_eq!(board, Board::new());
    assert_eq!(actions(&board).len(), 9);
    assert!(!terminal(&board));
    assert_eq!(player(&board), Some(Player::X));
}

#[test]
fn test_fixed_scenario_fills_last_cell() {
    let board = Board::from_rows([[X, O, X], [X, O, X], [O, E, O]]);
    assert_eq!(board.count(Player::X), 4);
    assert_eq!(board.count(Player::O), 4);
    assert_eq!(actions(&board).into_iter().collect::<Vec<_>>(), vec![Action::new(2, 1)]);

    let res = result(&board, Action::new(2, 1)).expect("(2, 1) is empty");
    assert_eq!(res, Board::from_rows([[X, O, X], [X, O, X], [O, X, O]]));
    assert_eq!(board.get(Action::new(2, 1)), Some(E));

    // Walk every line by hand: none is uniform.
    let rows = res.rows();
    for r in 0..3 {
        assert!(!(rows[r][0] == rows[r][1] && rows[r][1] == rows[r][2]), "row {r}");
    }
    for c in 0..3 {
        assert!(!(rows[0][c] == rows[1][c] && rows[1][c] == rows[2][c]), "column {c}");
    }
    assert!(!(rows[0][0] == rows[1][1] && rows[1][1] == rows[2][2]));
    assert!(!(rows[2][0] == rows[1][1] && rows[1][1] == rows[0][2]));

    assert_eq!(winner(&res), None);
    assert!(terminal(&res));
    assert_eq!(utility(&res), 0);
    assert_eq!(player(&res), None);
}

#[test]
fn test_fixed_scenario_rejects_occupied_cell() {
    let board = Board::from_rows([[X, O, X], [X, O, X], [O, E, O]]);
    let err = result(&board, Action::new(2, 0)).unwrap_err();
    assert_eq!(err.kind, InvalidActionKind::Occupied(Player::O));
    assert!(err.to_string().contains("Invalid action"));
}

#[test]
fn test_out_of_range_is_invalid() {
    let board = initial_state();
    for action in [Action::new(3, 0), Action::new(0, 3), Action::new(9, 9)] {
        let err = result(&board, action).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::OutOfBounds);
        assert_eq!(err.action, action);
    }
}

#[test]
fn test_every_line_wins_for_both_players() {
    for mark in [Player::X, Player::O] {
        for line in LINES {
            let mut rows = [[E; 3]; 3];
            for action in line {
                rows[action.row][action.col] = Cell::Occupied(mark);
            }
            let board = Board::from_rows(rows);
            assert_eq!(winner(&board), Some(mark), "{line:?}");
            assert!(terminal(&board));
            assert_eq!(utility(&board), mark.sign());
        }
    }
}

#[test]
fn test_result_does_not_mutate_input() {
    let board: Board = "X../.O./...".parse().unwrap();
    let snapshot = board;
    let first = result(&board, Action::new(2, 2)).unwrap();
    let second = result(&board, Action::new(0, 2)).unwrap();
    assert_eq!(board, snapshot);
    assert_ne!(first, second);
    assert_eq!(first.get(Action::new(2, 2)), Some(X));
    assert_eq!(second.get(Action::new(0, 2)), Some(X));
}

#[test]
fn test_win_before_full_board() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert!(terminal(&board));
    assert_eq!(player(&board), None);
    assert!(!actions(&board).is_empty());
}

#[test]
fn test_serde_round_trip_keeps_board() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
