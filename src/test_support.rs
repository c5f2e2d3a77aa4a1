//! Shared test utilities. Only compiled for tests.

use std::path::PathBuf;

use tui_textarea::{Input, Key};

use crate::core::entry::EntryBuffer;
use crate::core::state::{App, TodoList};

/// In-memory stand-in for the real entry adapter: just enough editing to
/// drive the state machine. Plain characters append, backspace pops,
/// everything else is ignored. Fields are public so tests can poke at the
/// buffer directly.
pub struct TestEntry {
    pub value: String,
    /// Cursor as a char offset, tracked so tests can check the
    /// cursor-at-end contract when an edit begins.
    pub cursor: usize,
}

impl TestEntry {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
        }
    }
}

impl EntryBuffer for TestEntry {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, text: &str) {
        self.value = text.to_string();
        self.cursor = 0;
    }

    fn move_cursor_to_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn handle_key(&mut self, input: Input) {
        match input.key {
            Key::Char(c) if !input.ctrl && !input.alt => {
                self.value.push(c);
                self.cursor += 1;
            }
            Key::Backspace => {
                self.value.pop();
                self.cursor = self.cursor.saturating_sub(1);
            }
            _ => {}
        }
    }
}

/// A plain (unmodified) character key.
pub fn key(c: char) -> Input {
    Input {
        key: Key::Char(c),
        ..Default::default()
    }
}

/// A ctrl-modified character key.
pub fn ctrl(c: char) -> Input {
    Input {
        key: Key::Char(c),
        ctrl: true,
        ..Default::default()
    }
}

/// A non-character key without modifiers.
pub fn special(k: Key) -> Input {
    Input {
        key: k,
        ..Default::default()
    }
}

/// An app seeded with the starter list, pointed at a throwaway path.
pub fn test_app() -> App {
    App::new(TodoList::seed(), PathBuf::from("/tmp/tuido-test.json"))
}

/// An app with an empty list.
pub fn empty_app() -> App {
    App::new(TodoList::default(), PathBuf::from("/tmp/tuido-test.json"))
}
