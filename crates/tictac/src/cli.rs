//! Command-line interface for tictac.

use crate::config::ModeChoice;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::{Difficulty, Player};

/// Tic-tac-toe in the terminal, with a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with random, heuristic and minimax opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game mode: pvp (two players) or pvc (against the computer)
        #[arg(short, long)]
        mode: Option<ModeChoice>,

        /// Computer difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark played by the computer (x or o)
        #[arg(long)]
        computer: Option<Player>,

        /// Skip the selection screen and start playing immediately
        #[arg(long)]
        quick: bool,
    },

    /// Pit two computer players against each other and tally the results
    Selfplay {
        /// Difficulty of the X player
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the O player
        #[arg(long, default_value = "hard")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show status and minimax scores for a position
    Analyze {
        /// Nine cells of X, O or '.', row by row (e.g. "X...O....")
        board: String,

        /// Player to move (inferred from mark counts if omitted)
        #[arg(short, long)]
        player: Option<Player>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
