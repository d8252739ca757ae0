//! Tests for board evaluation over every reachable position.

use std::collections::HashSet;
use tictac_core::{Board, GameMode, GameStatus, Player, Session, evaluate, is_draw, winning_line};

/// Walks every game reachable by alternating legal moves from an empty board.
fn collect_reachable(session: &Session, seen: &mut HashSet<Board>) {
    if !seen.insert(session.board()) {
        return;
    }
    if session.status().is_terminal() {
        return;
    }
    for pos in session.board().available_moves() {
        let mut next = session.clone();
        next.apply_human_move(pos.to_index()).expect("Empty square accepts a move");
        collect_reachable(&next, seen);
    }
}

#[test]
fn test_reachable_position_count() {
    let mut seen = HashSet::new();
    collect_reachable(&Session::new(GameMode::HumanVsHuman), &mut seen);
    // Well-known count of legal tic-tac-toe positions, empty board included.
    assert_eq!(seen.len(), 5478);
}

#[test]
fn test_exactly_one_status_for_reachable_boards() {
    let mut seen = HashSet::new();
    collect_reachable(&Session::new(GameMode::HumanVsHuman), &mut seen);

    for board in &seen {
        let status = evaluate(board);
        assert_eq!(status, evaluate(board), "evaluate must be pure");

        let x_wins = status == GameStatus::Won(Player::X);
        let o_wins = status == GameStatus::Won(Player::O);
        let drawn = status == GameStatus::Draw;
        let open = status == GameStatus::InProgress;
        assert_eq!(
            [x_wins, o_wins, drawn, open].iter().filter(|b| **b).count(),
            1
        );

        assert_eq!(drawn, is_draw(board));
        assert_eq!(winning_line(board).is_some(), x_wins || o_wins);
        if open {
            assert!(!board.available_moves().is_empty());
        }
    }
}

#[test]
fn test_row_win_example() {
    let board: Board = "XXXOO....".parse().unwrap();
    assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    let line = winning_line(&board).unwrap();
    let indices: Vec<usize> = line.positions().iter().map(|p| p.to_index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_full_board_draw_example() {
    let board: Board = "XOXOXOOXO".parse().unwrap();
    assert_eq!(evaluate(&board), GameStatus::Draw);
    assert!(board.available_moves().is_empty());
}
