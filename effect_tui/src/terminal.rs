//! Blocking terminal session for the views

use crate::app::{App, Control};
use crate::ui;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use thiserror::Error;

/// View session error
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Leaves raw mode and the alternate screen when dropped
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::error!(error = %e, "terminal restore failed");
        }
    }
}

fn restore() -> io::Result<()> {
    let leave_screen = || execute!(io::stdout(), LeaveAlternateScreen, Show);
    let steps: [&dyn Fn() -> io::Result<()>; 2] = [&leave_screen, &disable_raw_mode];
    run_all(&steps)
}

/// Run every step, returning the first error once all have run
fn run_all(steps: &[&dyn Fn() -> io::Result<()>]) -> io::Result<()> {
    steps.iter().fold(Ok(()), |acc, step| {
        let result = step();
        acc.and(result)
    })
}

/// Show the app until the user dismisses it
pub fn run(mut app: App) -> Result<(), ViewError> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(tab = app.current_tab.name(), "view opened");
    let result = event_loop(&mut terminal, &mut app);

    match &result {
        Ok(()) => tracing::info!("view closed"),
        Err(e) => tracing::error!(error = %e, "view aborted"),
    }
    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), ViewError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code, key.modifiers) == Control::Quit {
                    return Ok(());
                }
            }
        }
    }
}
