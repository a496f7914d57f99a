use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::SettingsViewModel;

pub struct SettingsView<'a> {
    model: &'a SettingsViewModel,
}

impl<'a> SettingsView<'a> {
    pub fn new(model: &'a SettingsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SettingsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .model
            .entries
            .iter()
            .map(|(key, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<24}", key), Style::default().fg(Color::DarkGray)),
                    Span::raw(value.as_str()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().title(" Settings ").borders(Borders::ALL))
            .render(area, buf);
    }
}
