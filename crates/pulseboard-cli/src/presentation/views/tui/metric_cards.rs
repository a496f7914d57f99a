use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::MetricCardViewModel;
use crate::presentation::views::summary::trend_arrow;

use super::trend_to_color;

/// Row of KPI tiles sharing the available width
pub struct MetricCardsView<'a> {
    cards: &'a [MetricCardViewModel],
    title: &'a str,
}

impl<'a> MetricCardsView<'a> {
    pub fn new(cards: &'a [MetricCardViewModel], title: &'a str) -> Self {
        Self { cards, title }
    }
}

impl<'a> Widget for MetricCardsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.cards.is_empty() {
            return;
        }

        let constraints = vec![Constraint::Ratio(1, self.cards.len() as u32); self.cards.len()];
        let slots = Layout::horizontal(constraints).split(inner);

        for (card, slot) in self.cards.iter().zip(slots.iter()) {
            CardView { card }.render(*slot, buf);
        }
    }
}

struct CardView<'a> {
    card: &'a MetricCardViewModel,
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let change_line = match &self.card.change_display {
            Some(change) => Line::from(Span::styled(
                format!("{} {}", trend_arrow(self.card.trend), change),
                Style::default().fg(trend_to_color(self.card.trend)),
            )),
            None => Line::from(Span::styled(
                "-",
                Style::default().fg(trend_to_color(None)),
            )),
        };

        let lines = vec![
            Line::from(Span::styled(
                self.card.display_value.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            change_line,
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(self.card.title.as_str())
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
