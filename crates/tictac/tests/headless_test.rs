//! Tests for the selfplay and analyze commands.

use tictac::{analyze, infer_to_move, play_game, run_selfplay};
use tictac_core::{Board, Difficulty, GameStatus, Player, evaluate};

#[test]
fn test_hard_selfplay_always_draws() {
    let tally = run_selfplay(Difficulty::Hard, Difficulty::Hard, 3, Some(1)).unwrap();
    assert_eq!(tally.games, 3);
    assert_eq!(tally.draws, 3);
    assert_eq!(tally.x_wins + tally.o_wins, 0);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let a = run_selfplay(Difficulty::Easy, Difficulty::Medium, 20, Some(42)).unwrap();
    let b = run_selfplay(Difficulty::Easy, Difficulty::Medium, 20, Some(42)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.x_wins + a.o_wins + a.draws, 20);
}

#[test]
fn test_easy_never_beats_hard() {
    let tally = run_selfplay(Difficulty::Easy, Difficulty::Hard, 25, Some(7)).unwrap();
    assert_eq!(tally.x_wins, 0);
}

#[test]
fn test_play_game_ends_terminal() {
    use rand::{SeedableRng, rngs::StdRng};
    let board = play_game(Difficulty::Easy, Difficulty::Easy, &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(evaluate(&board).is_terminal());
}

#[test]
fn test_tally_json_fields() {
    let tally = run_selfplay(Difficulty::Hard, Difficulty::Hard, 1, Some(0)).unwrap();
    let json = serde_json::to_value(tally).unwrap();
    assert_eq!(json["x"], "hard");
    assert_eq!(json["draws"], 1);
}

#[test]
fn test_analyze_finished_game() {
    let board: Board = "XXXOO....".parse().unwrap();
    let analysis = analyze(&board, infer_to_move(&board));
    assert_eq!(analysis.status, GameStatus::Won(Player::X));
    assert_eq!(analysis.winning_line, Some([0, 1, 2]));
    assert!(analysis.scores.is_empty());
    assert_eq!(analysis.best, None);
}

#[test]
fn test_analyze_reports_forced_win() {
    // O to move can win at once on the top row.
    let board: Board = "OO.XX.X..".parse().unwrap();
    assert_eq!(infer_to_move(&board), Player::O);
    let analysis = analyze(&board, Player::O);
    assert_eq!(analysis.best, Some(2));
    let text = analysis.to_string();
    assert!(text.contains("To move: O"));
    assert!(text.contains("win"));
}
