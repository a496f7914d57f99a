use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use crate::presentation::view_models::PostTableViewModel;

pub struct PostsTableView<'a> {
    model: &'a PostTableViewModel,
}

impl<'a> PostsTableView<'a> {
    pub fn new(model: &'a PostTableViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PostsTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // borders plus the header row
        let visible = area.height.saturating_sub(3).max(1) as usize;
        let offset = match self.model.selected {
            Some(selected) if selected >= visible => selected + 1 - visible,
            _ => 0,
        };

        let header = Row::new(vec![
            "ID",
            "PUBLISHED",
            "TYPE",
            "VIEWS",
            "LIKES",
            "COMMENTS",
            "ENG",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self
            .model
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, row)| {
                let style = if self.model.selected == Some(idx) {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(row.short_id.as_str()),
                    Cell::from(row.published.as_str()),
                    Cell::from(row.post_type.as_str()),
                    Cell::from(row.views.as_str()),
                    Cell::from(row.likes.as_str()),
                    Cell::from(row.comments.as_str()),
                    Cell::from(row.engagement.as_str()),
                ])
                .style(style)
            });

        let widths = [
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Min(6),
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
