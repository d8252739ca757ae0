//! Position analysis for the `analyze` command.

use serde::Serialize;
use tictac_core::{Board, GameStatus, OptimalPolicy, Player, evaluate, winning_line};
use tracing::instrument;

/// Minimax value of one candidate move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// Board index (0-8).
    pub index: usize,
    /// Human-readable square name.
    pub label: &'static str,
    /// Minimax score from the mover's point of view.
    pub score: i32,
}

/// Everything the analyzer knows about a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analyzed board, serialized in compact notation.
    #[serde(serialize_with = "serialize_notation")]
    pub board: Board,
    /// Win/draw/in-progress.
    pub status: GameStatus,
    /// Player to move.
    pub to_move: Player,
    /// Winning line indices, if the game is won.
    pub winning_line: Option<[usize; 3]>,
    /// Empty squares in ascending order.
    pub available: Vec<usize>,
    /// Minimax score per available move (empty once the game is over).
    pub scores: Vec<MoveScore>,
    /// Move the hard computer would play.
    pub best: Option<usize>,
}

fn serialize_notation<S: serde::Serializer>(board: &Board, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&board.notation())
}

/// Infers the player to move from mark counts: X moves when counts are equal.
pub fn infer_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Analyzes `board` for `to_move`.
#[instrument]
pub fn analyze(board: &Board, to_move: Player) -> Analysis {
    let status = evaluate(board);
    let scores: Vec<MoveScore> = if status == GameStatus::InProgress {
        OptimalPolicy
            .score_moves(board, to_move)
            .into_iter()
            .map(|(pos, score)| MoveScore {
                index: pos.to_index(),
                label: pos.label(),
                score,
            })
            .collect()
    } else {
        Vec::new()
    };

    // First of the best, matching the hard computer's tie-break.
    let mut best: Option<&MoveScore> = None;
    for candidate in &scores {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    Analysis {
        board: *board,
        status,
        to_move,
        winning_line: winning_line(board).map(|line| line.positions().map(|p| p.to_index())),
        available: board.available_moves().iter().map(|p| p.to_index()).collect(),
        best: best.map(|b| b.index),
        scores,
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        writeln!(f, "Status: {}", self.status)?;
        if let Some(line) = self.winning_line {
            writeln!(f, "Winning line: {:?}", line)?;
        }
        if self.status == GameStatus::InProgress {
            writeln!(f, "To move: {}", self.to_move)?;
            for s in &self.scores {
                let verdict = match s.score.signum() {
                    1 => "win",
                    -1 => "loss",
                    _ => "draw",
                };
                writeln!(f, "  {} ({}): {:+} {}", s.index, s.label, s.score, verdict)?;
            }
            if let Some(best) = self.best {
                write!(f, "Best move: {}", best)?;
            }
        }
        Ok(())
    }
}
