use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use crate::presentation::view_models::AnalyticsViewModel;

const BAR_WIDTH: usize = 20;

pub struct AnalyticsView<'a> {
    model: &'a AnalyticsViewModel,
}

impl<'a> AnalyticsView<'a> {
    pub fn new(model: &'a AnalyticsViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for AnalyticsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec!["TYPE", "POSTS", "VIEWS", "LIKES", "SHARE", ""])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.model.rows.iter().map(|row| {
            let filled = (row.share.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
            Row::new(vec![
                Cell::from(row.post_type.as_str()),
                Cell::from(row.posts.as_str()),
                Cell::from(row.views.as_str()),
                Cell::from(row.likes.as_str()),
                Cell::from(row.share_display.as_str()),
                Cell::from("█".repeat(filled)).style(Style::default().fg(Color::Magenta)),
            ])
        });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(BAR_WIDTH as u16),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
