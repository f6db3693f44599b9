//! # DetailView Component
//!
//! Full-panel view of a single animal: icon, name and tint. Stateless;
//! it only renders the record it is given.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use super::tint_color;
use crate::core::catalog::AnimalRecord;
use crate::tui::component::Component;

pub struct DetailView {
    pub record: AnimalRecord,
}

impl DetailView {
    pub fn new(record: AnimalRecord) -> Self {
        Self { record }
    }
}

impl Component for DetailView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = tint_color(self.record.tint);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.record.name))
            .title_bottom(Line::from(" Esc Back  q Quit ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::raw(self.record.icon)),
            Line::default(),
            Line::from(Span::styled(
                self.record.name,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("#{} · {}", self.record.id, self.record.symbol),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
