//! Interactive refresh loop.
//!
//! Takes over the terminal, renders the bound table, and waits for keys:
//! 'r' re-runs the pipeline (the user refresh trigger), 'q' or Esc quits.
//! A failed refresh shows the cleared table plus the error line and keeps
//! the loop running, so a fixed source file can be picked up on the next
//! 'r'.

use std::io::{self, Write};

use anyhow::Context;
use colonnade::{MemorySurface, TableLoader};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use crate::view;

const HELP_LINE: &str = "[r] refresh  [q] quit";

/// Runs the interactive viewer until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or an event cannot
/// be read. Refresh failures do not end the loop.
pub fn run(mut loader: TableLoader<MemorySurface>) -> anyhow::Result<()> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut loader, &mut stdout);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    loader.teardown();
    result
}

fn event_loop(
    loader: &mut TableLoader<MemorySurface>,
    stdout: &mut io::Stdout,
) -> anyhow::Result<()> {
    let mut status = status_line(loader.initialize());

    loop {
        draw(stdout, loader.surface(), &status)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('r') => {
                    debug!("user refresh requested");
                    status = status_line(loader.refresh());
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(())
}

fn status_line(outcome: colonnade::Result<()>) -> String {
    match outcome {
        Ok(()) => String::new(),
        Err(err) => format!("error: {err}"),
    }
}

fn draw(stdout: &mut io::Stdout, surface: &MemorySurface, status: &str) -> anyhow::Result<()> {
    queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    // Raw mode needs explicit carriage returns.
    for line in view::render(surface).lines() {
        write!(stdout, "{line}\r\n")?;
    }
    write!(stdout, "\r\n")?;
    if !status.is_empty() {
        write!(stdout, "{status}\r\n")?;
    }
    write!(stdout, "{HELP_LINE}\r\n")?;

    stdout.flush()?;
    Ok(())
}
