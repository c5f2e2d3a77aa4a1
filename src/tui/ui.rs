//! # Frame Rendering
//!
//! Pure view: the whole screen is rebuilt from state on every draw and
//! painted as a single paragraph anchored to the top-left. The same state
//! always yields the same lines, which is what the render tests rely on.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Mode, Todo};
use crate::tui::input_line::InputLine;

const TITLE: &str = " Todo List: ";
const EMPTY_HINT: &str = "The list is empty! press 'a' or 'o' to add a todo";
const DELETE_PROMPT: &str = "Delete todo? press 'y' to confirm or any other key to cancel.";

/// Draws the full frame and, while composing, parks the hardware cursor on
/// the entry line so the terminal blinks it there.
pub fn draw_ui(frame: &mut Frame, app: &App, entry: &InputLine) {
    let area = frame.area();
    let lines = view_lines(app, entry);

    if let Some(row) = entry_row(app, lines.len()) {
        let col = entry.cursor_col();
        if row < area.height && col < area.width {
            frame.set_cursor_position((area.x + col, area.y + row));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// The complete frame as styled lines, top to bottom:
/// title, items (or the empty hint), then any mode-specific trailer.
pub fn view_lines(app: &App, entry: &InputLine) -> Vec<Line<'static>> {
    let mut lines = vec![title_line()];

    if app.list.items.is_empty() {
        lines.push(Line::raw(EMPTY_HINT));
    } else {
        for (i, todo) in app.list.items.iter().enumerate() {
            let editing_here = matches!(app.mode, Mode::Editing { .. }) && i == app.list.cursor;
            if editing_here {
                // The live entry stands in for the stored text so the edit
                // is visible keystroke by keystroke.
                lines.push(entry.view_line());
            } else {
                lines.push(item_line(todo, i == app.list.cursor));
            }
        }
    }

    match app.mode {
        Mode::Adding => {
            if !app.list.items.is_empty() {
                lines.push(Line::default());
            }
            lines.push(entry.view_line());
        }
        Mode::ConfirmingDelete => {
            if !app.list.items.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::styled(
                DELETE_PROMPT,
                Style::default().fg(Color::LightRed),
            ));
        }
        Mode::Browsing | Mode::Editing { .. } => {}
    }

    lines
}

/// Screen row carrying the entry buffer, when one is on screen.
fn entry_row(app: &App, line_count: usize) -> Option<u16> {
    match app.mode {
        // Title occupies row 0; the edited item sits at its list position.
        Mode::Editing { .. } => Some(1 + app.list.cursor as u16),
        // While adding, the entry is always the last line of the frame.
        Mode::Adding => Some(line_count.saturating_sub(1) as u16),
        Mode::Browsing | Mode::ConfirmingDelete => None,
    }
}

fn title_line() -> Line<'static> {
    Line::styled(
        TITLE,
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
}

/// One list row: selection marker, checkbox, text (dimmed once checked).
fn item_line(todo: &Todo, selected: bool) -> Line<'static> {
    let marker = if selected { '>' } else { ' ' };
    if todo.checked {
        Line::from(vec![
            Span::raw(format!("{marker} [x] ")),
            Span::styled(
                todo.text.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
    } else {
        Line::raw(format!("{marker} [ ] {}", todo.text))
    }
}
