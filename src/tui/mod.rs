//! # TUI Driver
//!
//! The ratatui/crossterm layer: terminal lifecycle, the blocking event
//! loop, and persist-on-quit. This is the only module that touches the
//! terminal; every keystroke it reads goes straight to `core::update`.

mod event;
pub mod input_line;
mod ui;

use std::io;
use std::path::PathBuf;

use log::{info, warn};

use crate::core::state::{App, TodoList};
use crate::core::store;
use crate::core::update::{Effect, update};
use crate::tui::event::DriverEvent;
use crate::tui::input_line::InputLine;

/// Runs the editor against the todo file at `path` until the user quits.
///
/// Returns an error only for terminal-driver failures; the caller turns
/// those into a diagnostic and a non-zero exit. A failed save on the way
/// out is reported but does not fail the run.
pub fn run(path: PathBuf) -> io::Result<()> {
    let list = store::load(&path).unwrap_or_else(TodoList::seed);
    info!("starting with {} todos from {}", list.items.len(), path.display());

    let mut app = App::new(list, path);
    let mut entry = InputLine::new();

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut entry);
    ratatui::restore();
    result?;

    // Normal quit: persist before exiting. The session is already over, so
    // a write failure is reported rather than returned.
    if let Err(e) = store::save(&app.list, &app.path) {
        warn!("failed to save todos: {e}");
        eprintln!("tuido: could not save todos to {}: {e}", app.path.display());
    } else {
        info!("saved {} todos on quit", app.list.items.len());
    }
    Ok(())
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    entry: &mut InputLine,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw_ui(frame, app, entry))?;
        match event::next_event()? {
            DriverEvent::Key(input) => {
                if update(app, entry, input) == Effect::Quit {
                    return Ok(());
                }
            }
            DriverEvent::Redraw => {}
        }
    }
}
