//! # Transition Function
//!
//! Every keystroke in the application lands here. `update()` reads the
//! current mode, applies exactly one transition to the state, and tells the
//! event loop whether to keep going or to persist and quit.
//!
//! ```text
//! (&mut App, &mut dyn EntryBuffer) + Input  ──update()──▶  Effect
//! ```
//!
//! The function is total: unknown keys fall through as no-ops and no arm
//! indexes the list without establishing it is non-empty first. It performs
//! no I/O, which is what keeps every behavior in this crate testable by
//! feeding keys and asserting on state.

use tui_textarea::{Input, Key};

use crate::core::entry::EntryBuffer;
use crate::core::state::{App, Mode, Todo};

/// What the event loop must do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Keep looping.
    None,
    /// Persist the list and end the session.
    Quit,
}

/// Applies one keystroke to the application state.
pub fn update(app: &mut App, entry: &mut dyn EntryBuffer, input: Input) -> Effect {
    match app.mode {
        Mode::Browsing => browse(app, entry, input),
        Mode::Adding | Mode::Editing { .. } => compose(app, entry, input),
        Mode::ConfirmingDelete => confirm_delete(app, input),
    }
}

/// True for a ctrl-c chord, whatever the shift state.
fn is_ctrl_c(input: &Input) -> bool {
    input.ctrl && !input.alt && matches!(input.key, Key::Char('c') | Key::Char('C'))
}

// ============================================================================
// Browsing
// ============================================================================

/// Single-key commands over the list. Apart from ctrl-c, commands only
/// count when no modifier is held.
fn browse(app: &mut App, entry: &mut dyn EntryBuffer, input: Input) -> Effect {
    if is_ctrl_c(&input) {
        return Effect::Quit;
    }
    if input.ctrl || input.alt {
        return Effect::None;
    }
    match input.key {
        Key::Char('q') => return Effect::Quit,
        Key::Up | Key::Char('k') => {
            app.list.cursor = app.list.cursor.saturating_sub(1);
        }
        Key::Down | Key::Char('j') => {
            if app.list.cursor + 1 < app.list.items.len() {
                app.list.cursor += 1;
            }
        }
        Key::Char('a') | Key::Char('o') => {
            entry.clear();
            app.mode = Mode::Adding;
        }
        Key::Char('i') | Key::Char('e') => {
            // Editing an item that does not exist is not a state.
            if let Some(todo) = app.list.selected() {
                entry.set_value(&todo.text);
                entry.move_cursor_to_end();
                app.mode = Mode::Editing {
                    target: app.list.cursor,
                };
            }
        }
        Key::Char('d') => {
            if !app.list.items.is_empty() {
                app.mode = Mode::ConfirmingDelete;
            }
        }
        Key::Enter | Key::Char(' ') => {
            let cursor = app.list.cursor;
            if let Some(todo) = app.list.items.get_mut(cursor) {
                todo.checked = !todo.checked;
            }
        }
        _ => {}
    }
    Effect::None
}

// ============================================================================
// Adding / Editing
// ============================================================================

/// Keys while composing text. Esc and ctrl-c abandon the buffer, enter
/// commits it, and every other key belongs to the editing widget.
fn compose(app: &mut App, entry: &mut dyn EntryBuffer, input: Input) -> Effect {
    if input.key == Key::Esc || is_ctrl_c(&input) {
        entry.clear();
        app.mode = Mode::Browsing;
        return Effect::None;
    }
    if input.key == Key::Enter {
        let value = entry.value().to_string();
        if !value.is_empty() {
            match app.mode {
                Mode::Adding => {
                    app.list.items.push(Todo::new(value));
                    // An append to an empty list must leave the cursor valid.
                    app.list.clamp_cursor();
                }
                Mode::Editing { target } => {
                    if let Some(todo) = app.list.items.get_mut(target) {
                        todo.text = value;
                    }
                }
                Mode::Browsing | Mode::ConfirmingDelete => {}
            }
        }
        entry.clear();
        app.mode = Mode::Browsing;
        return Effect::None;
    }
    entry.handle_key(input);
    Effect::None
}

// ============================================================================
// Delete confirmation
// ============================================================================

/// One key decides: `y` (either case) deletes the item under the cursor,
/// anything else leaves the list alone. Both answers land back in Browsing.
fn confirm_delete(app: &mut App, input: Input) -> Effect {
    if confirms(&input) {
        if app.list.items.len() > 1 {
            app.list.items.remove(app.list.cursor);
            // Removing the last index leaves the cursor one past the end.
            app.list.clamp_cursor();
        } else {
            app.list.items.clear();
        }
    }
    app.mode = Mode::Browsing;
    Effect::None
}

fn confirms(input: &Input) -> bool {
    matches!(input.key, Key::Char('y') | Key::Char('Y')) && !input.ctrl && !input.alt
}
