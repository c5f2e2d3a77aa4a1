//! Terminal input: blocks on the next crossterm event and hands back only
//! the ones the application reacts to.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use tui_textarea::Input;

/// What the event loop wakes up for.
pub enum DriverEvent {
    /// A keystroke, already converted into the entry widget's vocabulary.
    Key(Input),
    /// The terminal changed shape; redraw with the current state.
    Redraw,
}

/// Blocks until something actionable arrives.
///
/// Key releases (reported by some terminals) and event kinds with no
/// meaning here (mouse, focus, paste) are swallowed so the state machine
/// only ever sees presses.
pub fn next_event() -> io::Result<DriverEvent> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                log::debug!("key event: {:?} ({:?})", key.code, key.modifiers);
                return Ok(DriverEvent::Key(key.into()));
            }
            Event::Resize(_, _) => return Ok(DriverEvent::Redraw),
            _ => {}
        }
    }
}
