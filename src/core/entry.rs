//! The text-entry seam between the state machine and the editing widget.
//!
//! Line editing itself (character insertion, deletion, cursor motion)
//! belongs to the widget behind this trait. The core only needs the small
//! surface below: read the buffer, preload it for an edit, wipe it, and
//! pass through the keys it does not handle itself.
//! `tui::input_line::InputLine` is the real implementation; tests use an
//! in-memory double.

use tui_textarea::Input;

/// Buffer operations the transition function requires from a text entry.
///
/// Implementations own the in-progress text and its cursor; the core never
/// looks inside beyond `value()`.
pub trait EntryBuffer {
    /// Current buffer contents.
    fn value(&self) -> &str;

    /// Replace the buffer contents, cursor at the start.
    fn set_value(&mut self, text: &str);

    /// Move the cursor past the last character.
    fn move_cursor_to_end(&mut self);

    /// Discard the contents and reset the cursor.
    fn clear(&mut self);

    /// Forward one keystroke verbatim to the editing widget.
    fn handle_key(&mut self, input: Input);
}
