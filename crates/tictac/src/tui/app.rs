//! Application state and logic.

use super::input::{digit_to_index, move_cursor};
use crate::config::{AppConfig, ModeChoice};
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use std::time::Duration;
use tictac_core::{Difficulty, GameMode, GameStatus, Player, Position, Session};
use tracing::{debug, error, info, instrument};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode and difficulty selection.
    Selection,
    /// The board.
    Game,
}

/// Focusable rows of the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    /// Player vs player or player vs computer.
    Mode,
    /// Computer tier.
    Difficulty,
    /// Computer's mark.
    ComputerMark,
    /// Start button.
    Start,
}

/// Choices made on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Game mode.
    pub mode: ModeChoice,
    /// Computer tier (ignored in pvp).
    pub difficulty: Difficulty,
    /// Computer's mark (ignored in pvp).
    pub computer_mark: Player,
    /// Focused row.
    pub focus: MenuField,
}

impl Selection {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            mode: *config.mode(),
            difficulty: *config.difficulty(),
            computer_mark: *config.computer_mark(),
            focus: MenuField::Start,
        }
    }

    /// Rows shown for the current mode; computer options hide in pvp.
    pub fn fields(&self) -> &'static [MenuField] {
        match self.mode {
            ModeChoice::Pvp => &[MenuField::Mode, MenuField::Start],
            ModeChoice::Pvc => &[
                MenuField::Mode,
                MenuField::Difficulty,
                MenuField::ComputerMark,
                MenuField::Start,
            ],
        }
    }

    /// Builds the core game mode from the current choices.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeChoice::Pvp => GameMode::HumanVsHuman,
            ModeChoice::Pvc => GameMode::HumanVsComputer {
                difficulty: self.difficulty,
                computer: self.computer_mark,
            },
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    fn change_value(&mut self, forward: bool) {
        match self.focus {
            MenuField::Mode => self.mode = self.mode.toggle(),
            MenuField::Difficulty if forward => self.difficulty = self.difficulty.next(),
            MenuField::Difficulty => self.difficulty = self.difficulty.previous(),
            MenuField::ComputerMark => self.computer_mark = self.computer_mark.opponent(),
            MenuField::Start => {}
        }
    }
}

/// Main application state.
pub struct App {
    screen: Screen,
    selection: Selection,
    session: Session,
    cursor: Position,
    status_message: String,
    computer_delay: Duration,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    /// Creates a new application on the selection screen.
    #[instrument(skip(rng))]
    pub fn new(config: &AppConfig, rng: StdRng) -> Self {
        let selection = Selection::from_config(config);
        Self {
            screen: Screen::Selection,
            selection,
            session: Session::new(selection.game_mode()),
            cursor: Position::Center,
            status_message: "Choose a mode and press Enter".to_string(),
            computer_delay: config.computer_delay(),
            rng,
            should_quit: false,
        }
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the selection screen state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Gets the current game.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the pacing delay if the computer is due to move.
    pub fn computer_pending(&self) -> Option<Duration> {
        (self.screen == Screen::Game && self.session.is_computer_turn()).then_some(self.computer_delay)
    }

    /// Leaves the selection screen and starts a game with the chosen mode.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        let mode = self.selection.game_mode();
        info!(%mode, "Starting game");
        self.session = Session::new(mode);
        self.screen = Screen::Game;
        self.cursor = Position::Center;
        self.refresh_status();
    }

    /// Restarts the game in the same mode.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Position::Center;
        self.refresh_status();
    }

    /// Abandons the game and returns to the selection screen.
    pub fn back_to_selection(&mut self) {
        debug!("Back to selection");
        self.session.reset();
        self.screen = Screen::Selection;
        self.status_message = "Choose a mode and press Enter".to_string();
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::Selection => self.handle_selection_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_selection_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.selection.move_focus(false),
            KeyCode::Down | KeyCode::Tab => self.selection.move_focus(true),
            KeyCode::Left => self.selection.change_value(false),
            KeyCode::Right | KeyCode::Char(' ') => self.selection.change_value(true),
            KeyCode::Enter => self.start_game(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('b') | KeyCode::Esc => self.back_to_selection(),
            _ if self.session.status().is_terminal() || self.session.is_computer_turn() => {
                // Board input is ignored after the game ends and while the computer plays.
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            key => {
                if let Some(index) = digit_to_index(key) {
                    self.place(index);
                } else {
                    self.cursor = move_cursor(self.cursor, key);
                }
            }
        }
    }

    fn place(&mut self, index: usize) {
        match self.session.apply_human_move(index) {
            Ok(mv) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                debug!(%mv, "Human move applied");
                self.refresh_status();
            }
            Err(e) => {
                self.status_message = format!("{}. {}", e, self.turn_message());
            }
        }
    }

    /// Plays the computer's move if it is due.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) {
        match self.session.maybe_computer_move(&mut self.rng) {
            Ok(Some(mv)) => {
                debug!(%mv, "Computer move applied");
                self.refresh_status();
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, "Computer failed to move");
                self.status_message = format!("Computer error: {}", e);
            }
        }
    }

    fn turn_message(&self) -> String {
        let player = self.session.current_player();
        if self.session.is_computer_turn() {
            format!("Computer ({}) is thinking...", player)
        } else {
            format!("Player {}'s Turn", player)
        }
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.session.status() {
            GameStatus::InProgress => self.turn_message(),
            GameStatus::Won(player) => {
                let who = if self.session.mode().computer() == Some(player) {
                    format!("Computer ({})", player)
                } else {
                    format!("Player {}", player)
                };
                format!("{} Wins! 🏆  Press 'r' to play again or 'b' to go back.", who)
            }
            GameStatus::Draw => "Game Draw! 🤝  Press 'r' to play again or 'b' to go back.".to_string(),
        };
    }
}
