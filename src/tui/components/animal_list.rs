//! # AnimalList Component
//!
//! The main list: every animal the user has added, with remove and
//! select gestures. Shows a placeholder when the list is empty.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `AnimalListState` lives in `TuiState`
//! - `AnimalList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use super::tint_color;
use crate::core::catalog::AnimalRecord;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent cursor state for the animal list.
pub struct AnimalListState {
    pub list_state: ListState,
}

impl AnimalListState {
    pub fn new(len: usize, initial: usize) -> Self {
        let mut state = Self {
            list_state: ListState::default(),
        };
        if len > 0 {
            state.list_state.select(Some(initial.min(len - 1)));
        }
        state
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the cursor inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        let next = match (len, self.cursor()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(next);
    }

    /// Handle a key event against the currently listed `animals`.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        animals: &[AnimalRecord],
    ) -> Option<ListEvent> {
        if animals.is_empty() {
            return None;
        }
        let current = self.cursor().unwrap_or(0).min(animals.len() - 1);
        match event {
            TuiEvent::CursorUp => {
                self.list_state.select(Some(current.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state
                    .select(Some((current + 1).min(animals.len() - 1)));
                None
            }
            TuiEvent::Home => {
                self.list_state.select(Some(0));
                None
            }
            TuiEvent::End => {
                self.list_state.select(Some(animals.len() - 1));
                None
            }
            TuiEvent::Submit | TuiEvent::CursorRight => {
                Some(ListEvent::Select(animals[current].id))
            }
            TuiEvent::Delete | TuiEvent::InputChar('d') => {
                Some(ListEvent::Remove(animals[current].id))
            }
            _ => None,
        }
    }
}

/// Events emitted by the animal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Select(u32),
    Remove(u32),
}

/// Transient render wrapper for the animal list.
pub struct AnimalList<'a> {
    state: &'a mut AnimalListState,
    animals: &'a [AnimalRecord],
    /// Id of the record currently focused for detail, marked with `›`
    selected_id: Option<u32>,
}

impl<'a> AnimalList<'a> {
    pub fn new(
        state: &'a mut AnimalListState,
        animals: &'a [AnimalRecord],
        selected_id: Option<u32>,
    ) -> Self {
        Self {
            state,
            animals,
            selected_id,
        }
    }

    fn render_empty(frame: &mut Frame, area: Rect, block: Block) {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                "🐾 No Animals",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Search to add animals.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

impl Component for AnimalList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(" Animals ({}) ", self.animals.len());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title)
            .title_bottom(Line::from(" Enter Open  d Remove  / Search  q Quit ").centered());

        if self.animals.is_empty() {
            Self::render_empty(frame, area, block);
            return;
        }

        let items: Vec<ListItem> = self
            .animals
            .iter()
            .map(|animal| {
                let marker = if self.selected_id == Some(animal.id) {
                    "› "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::raw(animal.icon),
                    Span::raw(" "),
                    Span::styled(animal.name, Style::default().fg(tint_color(animal.tint))),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
