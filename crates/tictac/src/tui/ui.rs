//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Board, GameStatus, Player, Position, Square, WinLine};

use super::app::{App, MenuField, Screen};

const X_COLOR: Color = Color::Green;
const O_COLOR: Color = Color::Magenta;
const DRAW_COLOR: Color = Color::Cyan;

fn player_color(player: Player) -> Color {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Selection => draw_selection(frame, chunks[1], app),
        Screen::Game => draw_game(frame, chunks[1], app),
    }

    let status_style = match app.session().status() {
        GameStatus::Won(player) if app.screen() == Screen::Game => {
            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD)
        }
        GameStatus::Draw if app.screen() == Screen::Game => {
            Style::default().fg(DRAW_COLOR).add_modifier(Modifier::BOLD)
        }
        _ => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}

fn draw_selection(frame: &mut Frame, area: Rect, app: &App) {
    let selection = app.selection();
    let mut lines = vec![Line::from("")];

    for field in selection.fields() {
        let (label, value) = match field {
            MenuField::Mode => ("Mode", selection.mode.label().to_string()),
            MenuField::Difficulty => ("Difficulty", selection.difficulty.label().to_string()),
            MenuField::ComputerMark => ("Computer plays", selection.computer_mark.to_string()),
            MenuField::Start => ("", "[ Start Game ]".to_string()),
        };

        let focused = *field == selection.focus;
        let style = if focused {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default()
        };

        let text = if label.is_empty() {
            value
        } else {
            format!("{:<15} < {} >", label, value)
        };
        lines.push(Line::from(Span::styled(text, style)));
        lines.push(Line::from(""));
    }

    let hint = "Up/Down select, Left/Right change, Enter start, q quit";
    lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("New Game").borders(Borders::ALL));
    frame.render_widget(menu, center_rect(area, 70, 14));
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(11), Constraint::Length(1)])
        .split(area);

    let mode = Paragraph::new(session.mode().to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(mode, rows[0]);

    // Hide the cursor once the game is over so the winning line stands out.
    let cursor = (!session.status().is_terminal()).then_some(app.cursor());
    draw_board(frame, rows[1], &session.board(), cursor, session.winning_line());

    let hint = Paragraph::new("Arrows + Enter or 1-9 to move, r restart, b back, q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    win: Option<WinLine>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [0, 2, 4].into_iter().enumerate() {
        let positions = [
            Position::ALL[row * 3],
            Position::ALL[row * 3 + 1],
            Position::ALL[row * 3 + 2],
        ];
        draw_row(frame, rows[chunk], board, cursor, win, &positions);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    win: Option<WinLine>,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], board, cursor, win, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], board, cursor, win, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], board, cursor, win, positions[2]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    win: Option<WinLine>,
    pos: Position,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            format!(" {} ", player),
            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if win.is_some_and(|line| line.contains(pos)) {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyCode;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_selection_screen_renders_menu() {
        let app = App::new(&AppConfig::default(), StdRng::seed_from_u64(0));
        let text = rendered(&app);
        assert!(text.contains("Start Game"));
        assert!(text.contains("Hard (minimax)"));
    }

    #[test]
    fn test_game_screen_renders_marks() {
        let config = AppConfig::from_toml("mode = \"pvp\"").unwrap();
        let mut app = App::new(&config, StdRng::seed_from_u64(0));
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('5'));
        let text = rendered(&app);
        assert!(text.contains(" X "));
        assert!(text.contains("Player O's Turn"));
    }
}
