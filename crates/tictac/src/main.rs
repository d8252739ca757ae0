//! tictac - terminal tic-tac-toe with a computer opponent.

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{
    AppConfig, Cli, Command, analyze, infer_to_move, init_file, init_stderr, run_selfplay, run_tui,
};
use tictac_core::Board;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            computer,
            quick,
        } => {
            let config = config.with_overrides(mode, difficulty, computer);
            init_file(config.log_file(), "info")?;
            info!(?config, "Launching terminal UI");
            run_tui(&config, quick).await
        }
        Command::Selfplay {
            x,
            o,
            games,
            seed,
            json,
        } => {
            init_stderr("warn");
            let tally = run_selfplay(x, o, games, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tally)?);
            } else {
                println!("{}", tally);
            }
            Ok(())
        }
        Command::Analyze {
            board,
            player,
            json,
        } => {
            init_stderr("warn");
            let board: Board = board
                .parse()
                .with_context(|| format!("Invalid board '{}'", board))?;
            let to_move = player.unwrap_or_else(|| infer_to_move(&board));
            let analysis = analyze(&board, to_move);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", analysis);
            }
            Ok(())
        }
    }
}
