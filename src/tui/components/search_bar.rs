//! # SearchBar Component
//!
//! Single-line text field bound to the search query.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete)
//! - Move the cursor (left, right, home, end)
//! - Show the prompt as a placeholder while empty
//! - Emit `QueryChanged` after every edit and `Cancel` on Esc
//!
//! ## State Management
//!
//! The buffer is internal state, but the query in `App` is the source of
//! truth. After any core update the parent calls `sync()`, so a query
//! cleared by a successful add also clears the field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Buffer contents changed; carries the new text
    QueryChanged(String),
    /// User backed out of the field (Esc)
    Cancel,
}

/// Search text field.
///
/// # Props
///
/// - `prompt`: Placeholder shown when the buffer is empty
/// - `focused`: Whether keystrokes are going to this field
///
/// # State
///
/// - `buffer`: Current text
/// - `cursor`: Byte offset into `buffer`, always on a char boundary
pub struct SearchBar {
    pub prompt: String,
    pub focused: bool,
    buffer: String,
    cursor: usize,
}

impl SearchBar {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            focused: false,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Reset the buffer to `query` if they differ. Cursor goes to the end.
    pub fn sync(&mut self, query: &str) {
        if self.buffer != query {
            self.buffer = query.to_string();
            self.cursor = self.buffer.len();
        }
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::QueryChanged(self.buffer.clone()))
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

/// Horizontal scroll for a field `width` columns wide.
///
/// Returns the byte offset the visible text starts at and the cursor's
/// column within the field. The window ends at the cursor once the text
/// before it no longer fits, leaving one column for the cursor itself.
fn visible_window(buffer: &str, cursor: usize, width: usize) -> (usize, usize) {
    let before = &buffer[..cursor];
    let column = before.width();
    if column < width {
        return (0, column);
    }
    let room = width.saturating_sub(1);
    let mut start = cursor;
    let mut used = 0;
    for (i, c) in before.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        start = i;
    }
    (start, used)
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search ");

        let inner_width = area.width.saturating_sub(2) as usize;
        let (start, column) = visible_window(&self.buffer, self.cursor, inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.prompt.as_str()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(&self.buffer[start..])
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let column = u16::try_from(column).unwrap_or(u16::MAX);
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let x = area.x.saturating_add(1).saturating_add(column).min(max_x);
            frame.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert_str(c.encode_utf8(&mut [0; 4]));
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let flat: String = text.chars().filter(|c| !c.is_control()).collect();
                if flat.is_empty() {
                    return None;
                }
                self.insert_str(&flat);
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Escape => Some(SearchEvent::Cancel),
            _ => None,
        }
    }
}
