//! Terminal UI for tictac.

mod app;
mod input;
mod ui;

pub use app::{App, MenuField, Screen, Selection};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

/// Run the TUI until the user quits.
///
/// With `quick` the selection screen is skipped and a game starts with the
/// configured mode.
#[instrument(skip(config))]
pub async fn run_tui(config: &AppConfig, quick: bool) -> Result<()> {
    info!("Starting tictac TUI");

    let mut app = App::new(config, StdRng::from_os_rng());
    if quick {
        app.start_game();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, then either pace and play the computer's move or wait for a key.
async fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if let Some(delay) = app.computer_pending() {
            debug!(?delay, "Computer thinking");
            sleep(delay).await;
            app.computer_move();

            // Keys typed during the delay belong to the computer's turn.
            let queued = drain_queued(|| {
                if event::poll(Duration::ZERO)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            })?;
            if !queued.is_empty() {
                debug!(count = queued.len(), "Discarded input from the computer's turn");
            }
            if quit_requested(&queued) {
                app.handle_key(KeyCode::Char('q'));
            }
            continue;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
}

/// Pulls every event from `next` until it reports an empty queue.
fn drain_queued<F>(mut next: F) -> io::Result<Vec<Event>>
where
    F: FnMut() -> io::Result<Option<Event>>,
{
    let mut events = Vec::new();
    while let Some(event) = next()? {
        events.push(event);
    }
    Ok(events)
}

/// True if any of `events` is a `q` key press.
fn quit_requested(events: &[Event]) -> bool {
    events.iter().any(|event| {
        matches!(
            event,
            Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q')
        )
    })
}
