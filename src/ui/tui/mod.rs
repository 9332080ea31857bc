mod input;
mod render;

use anyhow::Result;
use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::bootstrap::{DependencyPolicy, DependencyStatus};

use input::{InputResult, handle_key};
pub use render::ui;

/// What the startup screen shows.
pub struct StartupView<'a> {
    pub statuses: &'a [DependencyStatus],
    pub policy: DependencyPolicy,
    pub use_ascii: bool,
}

/// UI state that lives only as long as the TUI session.
#[derive(Default)]
pub struct UiContext {
    pub show_help: bool,
}

/// Runs the Terminal User Interface (TUI) loop.
///
/// Takes over the terminal (raw mode, alternate screen) until the user
/// quits, and restores it even when drawing fails.
pub fn run_tui(view: &StartupView<'_>) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("TUI started");

    let result = event_loop(&mut terminal, view);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("TUI stopped");

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &StartupView<'_>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut ctx = UiContext::default();

    loop {
        terminal.draw(|f| ui(f, view, &ctx))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!("key pressed: {:?}", key.code);
            if let InputResult::Break = handle_key(key, &mut ctx) {
                return Ok(());
            }
        }
    }
}
