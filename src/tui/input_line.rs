//! # Entry Line
//!
//! Thin adapter between the application and tui-textarea, which does the
//! actual line editing. The widget owns the in-progress text and its
//! cursor; this type narrows it to a single capped line and knows how to
//! present it (prompt, placeholder, visual cursor column).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tui_textarea::{CursorMove, Input, TextArea};
use unicode_width::UnicodeWidthChar;

use crate::core::entry::EntryBuffer;

/// Prompt shown ahead of the buffer while composing.
pub const PROMPT: &str = "> ";
/// Hint shown dimmed while the buffer is empty.
const PLACEHOLDER: &str = "What would you like to do?";
/// Longest accepted entry; insertions past this are swallowed.
const MAX_LEN: usize = 156;

pub struct InputLine {
    textarea: TextArea<'static>,
}

impl InputLine {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
        }
    }

    /// The buffer rendered as one styled line: green prompt, then either
    /// the text or the dimmed placeholder.
    pub fn view_line(&self) -> Line<'static> {
        let prompt = Span::styled(
            PROMPT,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );
        let body = if self.value().is_empty() {
            Span::styled(PLACEHOLDER, Style::default().add_modifier(Modifier::DIM))
        } else {
            Span::raw(self.value().to_string())
        };
        Line::from(vec![prompt, body])
    }

    /// Visual column of the cursor within the rendered line, prompt
    /// included, for hardware-cursor placement.
    pub fn cursor_col(&self) -> u16 {
        let (_, col) = self.textarea.cursor();
        let value_width: usize = self
            .value()
            .chars()
            .take(col)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        (PROMPT.len() + value_width) as u16
    }
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryBuffer for InputLine {
    fn value(&self) -> &str {
        // A textarea always holds at least one line.
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    fn set_value(&mut self, text: &str) {
        self.textarea = TextArea::new(vec![text.to_string()]);
    }

    fn move_cursor_to_end(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
    }

    fn clear(&mut self) {
        self.textarea = TextArea::default();
    }

    fn handle_key(&mut self, input: Input) {
        let before_text = self.value().to_string();
        let before_cursor = self.textarea.cursor();
        self.textarea.input(input);
        // The widget has no native length cap, and tab expansion or yanked
        // text can insert several characters at once. Any keystroke that
        // grows the line past the cap is rolled back whole; deletions and
        // cursor motion always go through.
        let len = self.value().chars().count();
        if len > MAX_LEN && len > before_text.chars().count() {
            self.textarea = TextArea::new(vec![before_text]);
            self.textarea
                .move_cursor(CursorMove::Jump(0, before_cursor.1 as u16));
        }
    }
}
