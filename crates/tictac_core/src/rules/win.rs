//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns true if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the player holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line in [`WIN_LINES`] order and its owner.
fn first_win(board: &Board) -> Option<(WinLine, Player)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (*line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    first_win(board).map(|(_, player)| player)
}

/// Returns the completed line, for highlighting the winning squares.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    first_win(board).map(|(line, _)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some(WIN_LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO.O.O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        let line = winning_line(&board).unwrap();
        assert_eq!(
            line.positions(),
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
    }

    #[test]
    fn test_winner_middle_column() {
        let board: Board = "XOX.O..OX".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let mut squares = [Square::Empty; 9];
            for pos in line.positions() {
                squares[pos.to_index()] = Square::Occupied(Player::O);
            }
            let board = Board::from_squares(squares);
            assert_eq!(winning_line(&board), Some(line));
        }
    }
}
