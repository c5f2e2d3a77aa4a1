//! # Application State
//!
//! The domain model: the todo list, the selection cursor, and the
//! interaction mode. Nothing in this module knows how any of it is drawn.
//!
//! ```text
//! App
//! ├── list: TodoList
//! │   ├── items: Vec<Todo>   // ordered; an item IS its position
//! │   └── cursor: usize      // 0 <= cursor < items.len() when non-empty
//! ├── mode: Mode             // Browsing | Adding | Editing | ConfirmingDelete
//! └── path: PathBuf          // where the list is persisted
//! ```
//!
//! All mutation goes through `update()` in `core::update`; the rest of the
//! crate only reads this state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single todo item. Items carry no identifier; an item is whatever
/// currently sits at its index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    pub text: String,
    pub checked: bool,
}

impl Todo {
    /// A fresh, unchecked item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }
}

/// The ordered items plus the selection cursor.
///
/// Invariant: `cursor < items.len()` whenever the list is non-empty. While
/// the list is empty the cursor is meaningless and must never be used to
/// index `items`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoList {
    pub items: Vec<Todo>,
    pub cursor: usize,
}

impl TodoList {
    /// The starter list used when no usable saved file exists.
    pub fn seed() -> Self {
        Self {
            items: vec![
                Todo::new("Buy carrots"),
                Todo::new("Buy celery"),
                Todo::new("Buy kohlrabi"),
            ],
            cursor: 0,
        }
    }

    /// Pulls the cursor back into range after the list changed length.
    /// No-op on an empty list.
    pub fn clamp_cursor(&mut self) {
        if !self.items.is_empty() {
            self.cursor = self.cursor.min(self.items.len() - 1);
        }
    }

    /// The item under the cursor, if the list has one.
    pub fn selected(&self) -> Option<&Todo> {
        self.items.get(self.cursor)
    }
}

/// The current interaction context. Exactly one is active at a time, and
/// mode-specific data lives inside its variant so an edit without a target
/// cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the list; single-letter commands are live.
    Browsing,
    /// Composing a brand-new item in the entry buffer.
    Adding,
    /// Rewriting `items[target]`; `target` is the cursor position captured
    /// when the edit began.
    Editing { target: usize },
    /// Awaiting a yes/no on deleting the item under the cursor.
    ConfirmingDelete,
}

/// Whole-application state handed to the transition function and the
/// renderer.
pub struct App {
    pub list: TodoList,
    pub mode: Mode,
    /// Persistence target, fixed at startup.
    pub path: PathBuf,
}

impl App {
    pub fn new(list: TodoList, path: PathBuf) -> Self {
        Self {
            list,
            mode: Mode::Browsing,
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_three_unchecked_items() {
        let list = TodoList::seed();
        let texts: Vec<&str> = list.items.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Buy carrots", "Buy celery", "Buy kohlrabi"]);
        assert!(list.items.iter().all(|t| !t.checked));
        assert_eq!(list.cursor, 0);
    }

    #[test]
    fn test_clamp_cursor_pulls_back_past_the_end() {
        let mut list = TodoList::seed();
        list.cursor = 7;
        list.clamp_cursor();
        assert_eq!(list.cursor, 2);
    }

    #[test]
    fn test_clamp_cursor_in_range_is_untouched() {
        let mut list = TodoList::seed();
        list.cursor = 1;
        list.clamp_cursor();
        assert_eq!(list.cursor, 1);
    }

    #[test]
    fn test_clamp_cursor_on_empty_list_is_a_noop() {
        let mut list = TodoList::default();
        list.cursor = 3;
        list.clamp_cursor();
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_selected_follows_the_cursor() {
        let mut list = TodoList::seed();
        list.cursor = 1;
        assert_eq!(list.selected().map(|t| t.text.as_str()), Some("Buy celery"));
    }
}
