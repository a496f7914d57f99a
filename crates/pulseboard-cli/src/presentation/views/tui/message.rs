use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::StatusLevel;

use super::status_level_to_color;

pub struct MessageView<'a> {
    title: &'a str,
    text: &'a str,
    level: StatusLevel,
}

impl<'a> MessageView<'a> {
    pub fn new(title: &'a str, text: &'a str, level: StatusLevel) -> Self {
        Self { title, text, level }
    }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.text,
            Style::default().fg(status_level_to_color(self.level)),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL),
        )
        .render(area, buf);
    }
}
