//! Error types shared across the core.

use crate::action::MoveError;

/// A move policy was asked to move on a board with no empty cell.
///
/// Callers only invoke policies while the game is in progress, so seeing
/// this error means the caller broke that contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("No available move: the board is full")]
pub struct NoAvailableMoveError;

/// A textual board could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A cell was not `X`, `O` or an empty marker.
    #[display("Invalid cell '{}' (use X, O or .)", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

/// Any error raised while driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// A move was rejected.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// A policy ran on a full board.
    #[display("{}", _0)]
    NoAvailableMove(NoAvailableMoveError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(e) => Some(e),
            GameError::NoAvailableMove(e) => Some(e),
        }
    }
}
