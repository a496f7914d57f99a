use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::SidebarViewModel;

pub struct SidebarView<'a> {
    model: &'a SidebarViewModel,
}

impl<'a> SidebarView<'a> {
    pub fn new(model: &'a SidebarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SidebarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .model
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style = if item.active {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", idx + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{} {:<10}", item.icon, item.name), style),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().title(" pulseboard ").borders(Borders::ALL))
            .render(area, buf);
    }
}
