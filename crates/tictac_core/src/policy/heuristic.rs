//! Medium tier: win if possible, otherwise block, then prefer center and corners.

use super::MovePolicy;
use crate::error::NoAvailableMoveError;
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Player};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Rule-based policy with a fixed priority order.
///
/// 1. A move that wins immediately.
/// 2. A move that blocks the opponent's immediate win.
/// 3. The center.
/// 4. A random empty corner.
/// 5. A random empty square.
///
/// Steps 1 and 2 scan squares in ascending order and take the first hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

/// First empty square that completes a line for `player`.
fn completing_move(board: &Board, available: &[Position], player: Player) -> Option<Position> {
    available
        .iter()
        .copied()
        .find(|&pos| check_winner(&board.with_mark(pos, player)) == Some(player))
}

impl MovePolicy for HeuristicPolicy {
    #[instrument(skip(self, rng))]
    fn select_move(
        &self,
        board: &Board,
        me: Player,
        rng: &mut dyn RngCore,
    ) -> Result<Position, NoAvailableMoveError> {
        let available = board.available_moves();
        if available.is_empty() {
            return Err(NoAvailableMoveError);
        }

        if let Some(pos) = completing_move(board, &available, me) {
            debug!(position = %pos, "Taking winning move");
            return Ok(pos);
        }

        if let Some(pos) = completing_move(board, &available, me.opponent()) {
            debug!(position = %pos, "Blocking opponent");
            return Ok(pos);
        }

        if board.is_empty(Position::Center) {
            debug!("Taking center");
            return Ok(Position::Center);
        }

        let corners: Vec<Position> = Position::CORNERS
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        if let Some(&pos) = corners.choose(rng) {
            debug!(position = %pos, "Taking corner");
            return Ok(pos);
        }

        let pos = available.choose(rng).copied().ok_or(NoAvailableMoveError)?;
        debug!(position = %pos, "Falling back to random square");
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn pick(board: &str, me: Player) -> Position {
        let board: Board = board.parse().unwrap();
        HeuristicPolicy
            .select_move(&board, me, &mut StdRng::seed_from_u64(5))
            .unwrap()
    }

    #[test]
    fn test_completes_own_line() {
        assert_eq!(pick("XX.......", Player::X), Position::TopRight);
    }

    #[test]
    fn test_blocks_opponent_line() {
        assert_eq!(pick("XX.......", Player::O), Position::TopRight);
    }

    #[test]
    fn test_win_beats_block() {
        // O can win on the middle row; X threatens the top row.
        assert_eq!(pick("XX.OO.X..", Player::O), Position::MiddleRight);
    }

    #[test]
    fn test_first_winning_square_in_index_order() {
        // X can complete row 0 at 2 or column 0 at 6.
        assert_eq!(pick("XX.X.O..O", Player::X), Position::TopRight);
    }

    #[test]
    fn test_takes_center_when_free() {
        assert_eq!(pick("X........", Player::O), Position::Center);
    }

    #[test]
    fn test_takes_a_corner_after_center() {
        let pos = pick("....X....", Player::O);
        assert!(pos.is_corner());
    }

    #[test]
    fn test_falls_back_to_edge() {
        // Center and corners taken, no line can be completed.
        let pos = pick("X.OOXXX.O", Player::O);
        assert!(matches!(pos, Position::TopCenter | Position::BottomCenter));
    }
}
