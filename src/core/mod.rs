//! # Core Application Logic
//!
//! What a todo list is and how keystrokes change it, free of any terminal
//! or rendering concern. The only input vocabulary is the entry widget's
//! backend-independent key type, so the whole module tests without a
//! terminal.
//!
//! ```text
//!        ┌──────────────────────────────────┐
//!        │               CORE               │
//!        │                                  │
//!        │  • state   (list, cursor, mode)  │
//!        │  • update  (the transitions)     │
//!        │  • entry   (text-buffer seam)    │
//!        │  • store   (flat-file JSON I/O)  │
//!        └────────────────┬─────────────────┘
//!                         │  keys in, Effect out
//!                         ▼
//!                  ┌─────────────┐
//!                  │     TUI     │
//!                  │  (ratatui)  │
//!                  └─────────────┘
//! ```

pub mod entry;
pub mod state;
pub mod store;
pub mod update;
