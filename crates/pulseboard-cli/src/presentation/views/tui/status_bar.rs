//! Status Bar View Component
//!
//! Bottom bar: record count, current route, feed status and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!("Posts: {} ", self.model.record_count)),
            Span::raw("| "),
            Span::raw(format!("{} ", self.model.path)),
            Span::raw("| "),
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[r]", key),
            Span::raw("efresh "),
            Span::styled("[tab]", key),
            Span::raw("next "),
            Span::styled("[j/k]", key),
            Span::raw("move "),
            Span::styled("[enter]", key),
            Span::raw("open "),
            Span::styled("[esc]", key),
            Span::raw("back"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
