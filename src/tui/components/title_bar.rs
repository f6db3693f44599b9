//! # TitleBar Component
//!
//! Top status bar: app name, how many animals are listed, whether a search
//! is active, and the latest status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Menagerie | 4 animals | Browsing | Added Cat"`
//! 2. **Default**: `"Menagerie | 3 animals | Browsing"`
//!
//! Stateless. It renders what it's given and doesn't care where it came from.

use crate::core::state::SessionMode;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub count: usize,
    pub mode: SessionMode,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(count: usize, mode: SessionMode, status_message: String) -> Self {
        Self {
            count,
            mode,
            status_message,
        }
    }

    fn text(&self) -> String {
        let noun = if self.count == 1 { "animal" } else { "animals" };
        let mode = match self.mode {
            SessionMode::Browsing => "Browsing",
            SessionMode::Searching => "Searching",
        };
        if self.status_message.is_empty() {
            format!("Menagerie | {} {} | {}", self.count, noun, mode)
        } else {
            format!(
                "Menagerie | {} {} | {} | {}",
                self.count, noun, mode, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
