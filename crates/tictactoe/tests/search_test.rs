//! Tests for minimax search and self-play.

use std::collections::HashSet;
use tictactoe::{
    Action, Board, Outcome, Player, Shortcut, actions, impending_winner, initial_state, minimax,
    minimax_with_stats, player, result, self_play, terminal, value, winner,
};

/// Every board reachable by alternating play, terminal ones included.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            stack.push(result(&board, action).unwrap());
        }
    }
    seen.into_iter().collect()
}

#[test]
fn test_reachable_state_count() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);
    assert!(boards.iter().all(Board::is_valid));
}

#[test]
fn test_self_play_from_empty_board_draws() {
    let playout = self_play(&initial_state()).unwrap();
    assert_eq!(playout.outcome(), Outcome::Draw);
    assert_eq!(playout.utility(), 0);
    assert_eq!(playout.plies().len(), 9);
    assert_eq!(playout.plies()[0].player, Player::X);
    assert!(playout.end().is_full());
}

#[test]
fn test_self_play_is_deterministic() {
    let first = self_play(&initial_state()).unwrap();
    let second = self_play(&initial_state()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_opening_draws_under_optimal_play() {
    for opening in Action::ALL {
        let board = result(&initial_state(), opening).unwrap();
        let playout = self_play(&board).unwrap();
        assert_eq!(playout.outcome(), Outcome::Draw, "opening {opening}");
    }
}

#[test]
fn test_completes_own_line_whenever_possible() {
    for board in reachable_boards() {
        let Some(mover) = player(&board) else {
            continue;
        };
        let Some(threat) = impending_winner(&board, mover) else {
            continue;
        };
        let (action, stats) = minimax_with_stats(&board);
        assert_eq!(action, Some(threat), "{board}");
        assert_eq!(stats.shortcut, Some(Shortcut::Win));
        let next = result(&board, threat).unwrap();
        assert_eq!(winner(&next), Some(mover), "{board}");
    }
}

#[test]
fn test_blocks_when_no_win_available() {
    for board in reachable_boards() {
        let Some(mover) = player(&board) else {
            continue;
        };
        if impending_winner(&board, mover).is_some() {
            continue;
        }
        let Some(threat) = impending_winner(&board, mover.opponent()) else {
            continue;
        };
        assert_eq!(minimax(&board), Some(threat), "{board}");
    }
}

#[test]
fn test_choice_preserves_value_in_late_game() {
    for board in reachable_boards() {
        if terminal(&board) || board.occupied() < 4 {
            continue;
        }
        let action = minimax(&board).unwrap();
        let next = result(&board, action).unwrap();
        assert_eq!(value(&next), value(&board), "{board} -> {action}");
    }
}

#[test]
fn test_earliest_optimal_move_wins_ties() {
    // O to move against a center opening: every corner draws, every edge
    // loses. (0, 0) is the first corner in row-major order.
    let board: Board = ".../.X./...".parse().unwrap();
    let (action, stats) = minimax_with_stats(&board);
    assert_eq!(action, Some(Action::new(0, 0)));
    assert_eq!(stats.shortcut, None);
}

#[test]
fn test_terminal_boards_have_no_move() {
    for board in reachable_boards().into_iter().filter(terminal) {
        assert_eq!(minimax(&board), None, "{board}");
        assert_eq!(player(&board), None, "{board}");
    }
}
