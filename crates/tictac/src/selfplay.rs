//! Headless computer-vs-computer matches.

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tictac_core::{Board, Difficulty, GameError, GameStatus, Player, evaluate};
use tracing::{debug, info, instrument};

/// Results of a series of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    /// Difficulty of the X player.
    pub x: Difficulty,
    /// Difficulty of the O player.
    pub o: Difficulty,
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "X ({}) vs O ({}), {} games", self.x, self.o, self.games)?;
        writeln!(f, "  X wins: {}", self.x_wins)?;
        writeln!(f, "  O wins: {}", self.o_wins)?;
        write!(f, "  Draws:  {}", self.draws)
    }
}

/// Plays one game between two policies and returns the final board.
#[instrument(skip(rng))]
pub fn play_game(x: Difficulty, o: Difficulty, rng: &mut dyn RngCore) -> Result<Board, GameError> {
    let mut board = Board::new();
    let mut to_move = Player::X;
    while evaluate(&board) == GameStatus::InProgress {
        let difficulty = if to_move == Player::X { x } else { o };
        let pos = difficulty.policy().select_move(&board, to_move, rng)?;
        board = board.apply_move(pos.to_index(), to_move)?;
        to_move = to_move.opponent();
    }
    debug!(board = %board.notation(), status = %evaluate(&board), "Game finished");
    Ok(board)
}

/// Plays `games` games and tallies the outcomes.
///
/// With a seed the run is reproducible; without one it draws from OS entropy.
#[instrument]
pub fn run(x: Difficulty, o: Difficulty, games: u32, seed: Option<u64>) -> Result<Tally, GameError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut tally = Tally {
        x,
        o,
        ..Tally::default()
    };
    for _ in 0..games {
        let board = play_game(x, o, &mut rng)?;
        tally.record(evaluate(&board));
    }

    info!(
        games = tally.games,
        x_wins = tally.x_wins,
        o_wins = tally.o_wins,
        draws = tally.draws,
        "Self-play finished"
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_every_game() {
        let tally = run(Difficulty::Easy, Difficulty::Medium, 40, Some(1)).unwrap();
        assert_eq!(tally.games, 40);
        assert_eq!(tally.x_wins + tally.o_wins + tally.draws, 40);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = run(Difficulty::Easy, Difficulty::Easy, 25, Some(99)).unwrap();
        let b = run(Difficulty::Easy, Difficulty::Easy, 25, Some(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let tally = Tally {
            x: Difficulty::Hard,
            o: Difficulty::Easy,
            games: 3,
            x_wins: 2,
            o_wins: 0,
            draws: 1,
        };
        assert_eq!(
            tally.to_string(),
            "X (hard) vs O (easy), 3 games\n  X wins: 2\n  O wins: 0\n  Draws:  1"
        );
    }
}
