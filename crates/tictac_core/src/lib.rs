//! Tic-tac-toe game logic with a computer opponent.
//!
//! This crate is the pure, synchronous core of the game. It has no
//! rendering, input or timing concerns; a front end drives it through
//! [`Session`].
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid and query helpers ([`Board`], [`Position`])
//! - **Rules**: win/draw detection ([`evaluate`], [`WinLine`])
//! - **Policies**: computer move selection at three tiers ([`MovePolicy`])
//! - **Session**: turn controller and game mode ([`Session`], [`GameMode`])
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tictac_core::{Difficulty, GameMode, GameStatus, Session};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::new(GameMode::versus_computer(Difficulty::Hard));
//!
//! // Human plays X in the center, the computer answers as O.
//! session.apply_human_move(4).unwrap();
//! let reply = session.maybe_computer_move(&mut rng).unwrap();
//! assert!(reply.is_some());
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod policy;
mod position;
mod rules;
mod session;
mod types;

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};
pub use error::{BoardParseError, GameError, NoAvailableMoveError};

// Crate-level exports - Result evaluation
pub use rules::{WIN_LINES, WinLine, check_winner, evaluate, is_draw, is_full, winning_line};

// Crate-level exports - Move policies
pub use policy::{
    Difficulty, HeuristicPolicy, MovePolicy, OptimalPolicy, RandomPolicy, WIN_SCORE,
};

// Crate-level exports - Session and turn controller
pub use session::{
    GameMode, Phase, Session, apply_human_move, get_board, get_status, maybe_computer_move,
    new_session,
};
