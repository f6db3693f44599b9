//! # Suggestions Component
//!
//! The panel under the search field while it has focus. With an empty
//! query it offers the whole catalog ("All Animals"); once the user types,
//! it offers only the matches ("Results"). Enter adds the highlighted
//! animal to the list.
//!
//! Animals already in the list are still shown, marked with a check.
//! Choosing one of those does nothing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use super::tint_color;
use crate::core::catalog::AnimalRecord;
use crate::core::state::SessionMode;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent cursor state for the suggestion panel.
pub struct SuggestionsState {
    pub list_state: ListState,
}

impl SuggestionsState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Back to the first row, used whenever the query changes.
    pub fn reset(&mut self) {
        self.list_state = ListState::default().with_selected(Some(0));
    }

    pub fn clamp(&mut self, len: usize) {
        let next = match (len, self.cursor()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(next);
    }

    /// Handle a key event against the suggestions currently on offer.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        suggestions: &[AnimalRecord],
    ) -> Option<SuggestionEvent> {
        if suggestions.is_empty() {
            return None;
        }
        let current = self.cursor().unwrap_or(0).min(suggestions.len() - 1);
        match event {
            TuiEvent::CursorUp => {
                self.list_state.select(Some(current.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state
                    .select(Some((current + 1).min(suggestions.len() - 1)));
                None
            }
            TuiEvent::Submit => Some(SuggestionEvent::Add(suggestions[current])),
            _ => None,
        }
    }
}

impl Default for SuggestionsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the suggestion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionEvent {
    Add(AnimalRecord),
}

/// Transient render wrapper for the suggestion panel.
pub struct Suggestions<'a> {
    state: &'a mut SuggestionsState,
    suggestions: &'a [AnimalRecord],
    mode: SessionMode,
    listed: &'a [AnimalRecord],
}

impl<'a> Suggestions<'a> {
    pub fn new(
        state: &'a mut SuggestionsState,
        suggestions: &'a [AnimalRecord],
        mode: SessionMode,
        listed: &'a [AnimalRecord],
    ) -> Self {
        Self {
            state,
            suggestions,
            mode,
            listed,
        }
    }

    fn title(&self) -> String {
        match self.mode {
            SessionMode::Browsing => " All Animals ".to_string(),
            SessionMode::Searching => format!(" Results ({}) ", self.suggestions.len()),
        }
    }
}

impl Component for Suggestions<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(self.title())
            .title_bottom(Line::from(" Enter Add  Esc Cancel ").centered());

        if self.suggestions.is_empty() {
            let empty = Paragraph::new("No matches")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|animal| {
                let added = self.listed.iter().any(|a| a.id == animal.id);
                let mut spans = vec![
                    Span::raw(animal.icon),
                    Span::raw(" "),
                    Span::styled(animal.name, Style::default().fg(tint_color(animal.tint))),
                ];
                if added {
                    spans.push(Span::styled(" ✓", Style::default().fg(Color::DarkGray)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
