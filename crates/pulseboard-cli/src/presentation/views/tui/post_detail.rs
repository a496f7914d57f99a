use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::PostDetailViewModel;

pub struct PostDetailView<'a> {
    model: &'a PostDetailViewModel,
}

impl<'a> PostDetailView<'a> {
    pub fn new(model: &'a PostDetailViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PostDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .model
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
                    Span::raw(value.as_str()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
