//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictac_core::{Difficulty, GameMode, Player};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Who plays: two humans, or a human against the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModeChoice {
    /// Player vs player on one keyboard.
    Pvp,
    /// Player vs computer.
    #[default]
    Pvc,
}

impl ModeChoice {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pvp => "Player vs Player",
            Self::Pvc => "Player vs Computer",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::Pvp => Self::Pvc,
            Self::Pvc => Self::Pvp,
        }
    }
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default game mode.
    mode: ModeChoice,

    /// Default computer difficulty.
    difficulty: Difficulty,

    /// Mark played by the computer.
    computer_mark: Player,

    /// Pause before the computer replies, in milliseconds.
    computer_delay_ms: u64,

    /// Log file used while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ModeChoice::Pvc,
            difficulty: Difficulty::Hard,
            computer_mark: Player::O,
            computer_delay_ms: 500,
            log_file: PathBuf::from("tictac.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the explicit path, else `tictac.toml` if it exists, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<ModeChoice>,
        difficulty: Option<Difficulty>,
        computer_mark: Option<Player>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(mark) = computer_mark {
            self.computer_mark = mark;
        }
        self
    }

    /// Builds the core game mode from these settings.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeChoice::Pvp => GameMode::HumanVsHuman,
            ModeChoice::Pvc => GameMode::HumanVsComputer {
                difficulty: self.difficulty,
                computer: self.computer_mark,
            },
        }
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_mode_from_settings() {
        let config = AppConfig::default();
        assert_eq!(
            config.game_mode(),
            GameMode::HumanVsComputer {
                difficulty: Difficulty::Hard,
                computer: Player::O
            }
        );

        let pvp = config.with_overrides(Some(ModeChoice::Pvp), None, None);
        assert_eq!(pvp.game_mode(), GameMode::HumanVsHuman);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = AppConfig::default().with_overrides(None, Some(Difficulty::Easy), Some(Player::X));
        assert_eq!(*config.mode(), ModeChoice::Pvc);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(*config.computer_mark(), Player::X);
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_mode_choice_parsing() {
        assert_eq!("PVP".parse::<ModeChoice>().unwrap(), ModeChoice::Pvp);
        assert_eq!(ModeChoice::Pvc.to_string(), "pvc");
        assert_eq!(ModeChoice::Pvc.toggle(), ModeChoice::Pvp);
    }
}
