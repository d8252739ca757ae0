//! Easy tier: any empty square.

use super::MovePolicy;
use crate::error::NoAvailableMoveError;
use crate::position::Position;
use crate::types::{Board, Player};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    #[instrument(skip(self, rng))]
    fn select_move(
        &self,
        board: &Board,
        me: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Position, NoAvailableMoveError> {
        let pos = board
            .available_moves()
            .choose(rng)
            .copied()
            .ok_or(NoAvailableMoveError)?;
        debug!(position = %pos, "Random policy chose position");
        Ok(pos)
    }
}
