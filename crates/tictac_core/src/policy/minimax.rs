//! Hard tier: exhaustive minimax over the remaining game tree.
//!
//! Terminal positions score `+WIN_SCORE` for the computer, `-WIN_SCORE` for
//! its opponent and zero for a draw. Scores are not discounted by depth, so
//! a win in one move and a win in five look the same; among equal scores the
//! lowest square index is chosen, which makes play fully deterministic.

use super::MovePolicy;
use crate::error::NoAvailableMoveError;
use crate::position::Position;
use crate::rules::evaluate;
use crate::types::{Board, GameStatus, Player};
use rand::RngCore;
use tracing::{debug, instrument};

/// Score of a terminal position won by the searching player.
pub const WIN_SCORE: i32 = 10;

/// Perfect-play policy. Never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Scores every empty square from `me`'s point of view.
    ///
    /// Each entry is the minimax value of the game after `me` plays there,
    /// with the opponent to move. Entries are in ascending index order.
    #[instrument(skip(self))]
    pub fn score_moves(&self, board: &Board, me: Player) -> Vec<(Position, i32)> {
        board
            .empty_positions()
            .map(|pos| (pos, minimax(board.with_mark(pos, me), me.opponent(), me)))
            .collect()
    }
}

impl MovePolicy for OptimalPolicy {
    #[instrument(skip(self, _rng))]
    fn select_move(
        &self,
        board: &Board,
        me: Player,
        _rng: &mut dyn RngCore,
    ) -> Result<Position, NoAvailableMoveError> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.score_moves(board, me) {
            // Strict comparison keeps the first of equally scored moves.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(NoAvailableMoveError)?;
        debug!(position = %pos, score, "Minimax chose position");
        Ok(pos)
    }
}

/// Value of `board` for `computer` with `to_move` about to play.
///
/// Every call works on its own copy of the board.
fn minimax(board: Board, to_move: Player, computer: Player) -> i32 {
    match evaluate(&board) {
        GameStatus::Won(winner) if winner == computer => return WIN_SCORE,
        GameStatus::Won(_) => return -WIN_SCORE,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let children = board
        .empty_positions()
        .map(|pos| minimax(board.with_mark(pos, to_move), to_move.opponent(), computer));

    let best = if to_move == computer {
        children.max()
    } else {
        children.min()
    };
    // An in-progress board always has an empty square.
    best.unwrap_or(0)
}
