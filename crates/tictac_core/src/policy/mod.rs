//! Computer move selection.
//!
//! Three interchangeable policies sit behind [`MovePolicy`], one per
//! [`Difficulty`] tier. Policies are stateless: the only inputs are the
//! board, the mark they play, and a randomness source supplied by the
//! caller (seed it for reproducible games).

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicPolicy;
pub use minimax::{OptimalPolicy, WIN_SCORE};
pub use random::RandomPolicy;

use crate::error::NoAvailableMoveError;
use crate::position::Position;
use crate::types::{Board, Player};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Strategy that picks the computer's next move.
pub trait MovePolicy: std::fmt::Debug + Send + Sync {
    /// Selects a move for `me` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`NoAvailableMoveError`] when the board has no empty square.
    fn select_move(
        &self,
        board: &Board,
        me: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Position, NoAvailableMoveError>;
}

/// Difficulty tier of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    Easy,
    /// Win, block, center, corner, then random.
    Medium,
    /// Exhaustive minimax search; never loses.
    #[default]
    Hard,
}

static RANDOM: RandomPolicy = RandomPolicy;
static HEURISTIC: HeuristicPolicy = HeuristicPolicy;
static OPTIMAL: OptimalPolicy = OptimalPolicy;

impl Difficulty {
    /// Returns the policy that plays at this tier.
    #[instrument]
    pub fn policy(self) -> &'static dyn MovePolicy {
        match self {
            Difficulty::Easy => &RANDOM,
            Difficulty::Medium => &HEURISTIC,
            Difficulty::Hard => &OPTIMAL,
        }
    }

    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (random)",
            Difficulty::Medium => "Medium (block & attack)",
            Difficulty::Hard => "Hard (minimax)",
        }
    }

    /// Cycles to the next tier, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Cycles to the previous tier, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}
