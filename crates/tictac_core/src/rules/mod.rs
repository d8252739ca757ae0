//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so policies and the session share one evaluator.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};

use crate::types::{Board, GameStatus};

/// Determines whether the board is won, drawn or still in progress.
///
/// A win takes precedence over a full board. On boards that legal play
/// cannot reach (two completed lines of different players), the first line
/// in [`WIN_LINES`] order decides the winner.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_top_row_win() {
        assert_eq!(evaluate(&board("XXXOO....")), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOXOXOOXO")), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X completes the main diagonal with the last empty square.
        assert_eq!(evaluate(&board("XOOOXXXOX")), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_partial_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
        assert_eq!(evaluate(&board("XO..X....")), GameStatus::InProgress);
    }

    #[test]
    fn test_unreachable_board_uses_first_line() {
        // Row 0 belongs to O and row 1 to X; row 0 comes first.
        assert_eq!(evaluate(&board("OOOXXX...")), GameStatus::Won(Player::O));
        assert_eq!(evaluate(&board("XXXOOO...")), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for s in ["XXXOO....", "XOXOXOOXO", ".........", "XO.OX...X"] {
            let b = board(s);
            assert_eq!(evaluate(&b), evaluate(&b));
        }
    }
}
