//! Terminal tic-tac-toe front end.
//!
//! Wraps the pure game core in a command-line tool:
//!
//! - **play**: interactive terminal UI with mode and difficulty selection
//! - **selfplay**: computer-vs-computer tallies
//! - **analyze**: minimax scores for any position
//!
//! Settings come from a TOML file ([`AppConfig`]) with command-line overrides.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analyze;
mod cli;
mod config;
mod logging;
mod selfplay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, ModeChoice};

// Crate-level exports - Logging
pub use logging::{init_file, init_stderr};

// Crate-level exports - Headless commands
pub use analyze::{Analysis, MoveScore, analyze, infer_to_move};
pub use selfplay::{Tally, play_game, run as run_selfplay};

// Crate-level exports - Terminal UI
pub use tui::{App, MenuField, Screen, Selection, run_tui};
