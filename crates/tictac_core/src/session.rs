//! Game session: the turn controller for one game.
//!
//! A [`Session`] owns the board, whose turn it is, the game status and the
//! configured [`GameMode`]. Front ends drive it with explicit calls:
//! [`Session::apply_human_move`] for input and
//! [`Session::maybe_computer_move`] when the computer may be due to play.
//! Any pacing delay before the computer's reply belongs to the front end.

use crate::action::{Move, MoveError};
use crate::error::GameError;
use crate::policy::Difficulty;
use crate::position::Position;
use crate::rules::{WinLine, evaluate, winning_line};
use crate::types::{Board, GameStatus, Player};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board.
    HumanVsHuman,
    /// One human against the computer.
    HumanVsComputer {
        /// Policy tier of the computer.
        difficulty: Difficulty,
        /// Mark played by the computer.
        computer: Player,
    },
}

impl GameMode {
    /// Human plays X, computer plays O at the given tier.
    pub fn versus_computer(difficulty: Difficulty) -> Self {
        GameMode::HumanVsComputer {
            difficulty,
            computer: Player::O,
        }
    }

    /// Returns the computer's tier, if there is a computer.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { difficulty, .. } => Some(*difficulty),
        }
    }

    /// Returns the computer's mark, if there is a computer.
    pub fn computer(&self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer, .. } => Some(*computer),
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::versus_computer(Difficulty::default())
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "Player vs Player"),
            GameMode::HumanVsComputer {
                difficulty,
                computer,
            } => write!(f, "Player vs Computer ({}, computer is {})", difficulty, computer),
        }
    }
}

/// State of the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// Game over; only a reset leaves this phase.
    Terminal(GameStatus),
}

/// One game of tic-tac-toe.
///
/// Serializes as a read-only snapshot. There is no deserializer: a session
/// only reaches a state through legal moves, so its status always matches
/// its board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    board: Board,
    current_player: Player,
    status: GameStatus,
    mode: GameMode,
    history: Vec<Move>,
}

impl Session {
    /// Starts a new game: empty board, X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns a snapshot of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the player to move (or who made the final move once terminal).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the state of the turn controller.
    pub fn phase(&self) -> Phase {
        match self.status {
            GameStatus::InProgress => Phase::AwaitingMove(self.current_player),
            status => Phase::Terminal(status),
        }
    }

    /// Returns true while the game is in progress and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.mode.computer() == Some(self.current_player)
    }

    /// Returns the completed line once the game is won.
    pub fn winning_line(&self) -> Option<WinLine> {
        winning_line(&self.board)
    }

    /// Applies a move for the human whose turn it is.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::NotYourTurn`] while the computer is to move
    /// - [`MoveError::OutOfRange`] / [`MoveError::SquareOccupied`] for bad squares
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<Move, MoveError> {
        if self.status.is_terminal() {
            warn!(index, status = %self.status, "Move attempted after game over");
            return Err(MoveError::GameOver);
        }

        if self.is_computer_turn() {
            warn!(index, "Human tried to move on the computer's turn");
            return Err(MoveError::NotYourTurn(self.current_player));
        }

        self.commit(index).inspect_err(|e| {
            warn!(index, error = %e, "Invalid move");
        })
    }

    /// Lets the computer move if it is due.
    ///
    /// Returns `Ok(None)` without touching the session when the game is over
    /// or it is a human's turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoAvailableMove`] if the policy finds no empty
    /// square, which cannot happen while the game is in progress.
    #[instrument(skip(self, rng), fields(player = %self.current_player))]
    pub fn maybe_computer_move(&mut self, rng: &mut dyn RngCore) -> Result<Option<Move>, GameError> {
        let GameMode::HumanVsComputer { difficulty, .. } = self.mode else {
            return Ok(None);
        };
        if !self.is_computer_turn() {
            debug!("Not the computer's turn");
            return Ok(None);
        }

        let pos = difficulty
            .policy()
            .select_move(&self.board, self.current_player, rng)?;
        let mv = self.commit(pos.to_index())?;
        Ok(Some(mv))
    }

    /// Applies a human move followed immediately by the computer's reply.
    ///
    /// For front ends that do not pace the computer.
    ///
    /// # Errors
    ///
    /// Returns the human move's [`MoveError`] or the policy's error.
    #[instrument(skip(self, rng))]
    pub fn play_turn(
        &mut self,
        index: usize,
        rng: &mut dyn RngCore,
    ) -> Result<(Move, Option<Move>), GameError> {
        let human = self.apply_human_move(index)?;
        let reply = self.maybe_computer_move(rng)?;
        Ok((human, reply))
    }

    /// Clears the board for a new game in the same mode. X moves first.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(mode = %self.mode, "Resetting game");
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Places the current player's mark, evaluates, then hands over the turn.
    fn commit(&mut self, index: usize) -> Result<Move, MoveError> {
        let player = self.current_player;
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        let board = self.board.apply_move(index, player)?;

        let mv = Move::new(player, position);
        self.board = board;
        self.history.push(mv);
        self.status = evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => {
                self.current_player = player.opponent();
                debug!(%mv, "Move applied");
            }
            status => {
                info!(%mv, %status, moves = self.history.len(), "Game over");
            }
        }
        Ok(mv)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  Free-function interface for front ends
// ─────────────────────────────────────────────────────────────

/// Starts a new game in the given mode.
pub fn new_session(mode: GameMode) -> Session {
    Session::new(mode)
}

/// Applies a human move. See [`Session::apply_human_move`].
pub fn apply_human_move(session: &mut Session, index: usize) -> Result<Move, MoveError> {
    session.apply_human_move(index)
}

/// Lets the computer move if due. See [`Session::maybe_computer_move`].
pub fn maybe_computer_move(
    session: &mut Session,
    rng: &mut dyn RngCore,
) -> Result<Option<Move>, GameError> {
    session.maybe_computer_move(rng)
}

/// Returns the game status.
pub fn get_status(session: &Session) -> GameStatus {
    session.status()
}

/// Returns a read-only snapshot of the board.
pub fn get_board(session: &Session) -> Board {
    session.board()
}
