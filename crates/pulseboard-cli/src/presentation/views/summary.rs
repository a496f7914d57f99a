use pulseboard_engine::Trend;
use std::fmt;

use crate::presentation::formatters::{format_compact, format_percent};
use crate::presentation::view_models::SummaryViewModel;

pub struct SummaryView<'a> {
    data: &'a SummaryViewModel,
}

impl<'a> SummaryView<'a> {
    pub fn new(data: &'a SummaryViewModel) -> Self {
        Self { data }
    }
}

pub(crate) fn trend_arrow(trend: Option<Trend>) -> &'static str {
    match trend {
        Some(Trend::Up) => "▲",
        Some(Trend::Down) => "▼",
        None => "",
    }
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        write!(
            f,
            "Last {} days vs previous {} days ({} posts",
            data.window_days, data.window_days, data.total_posts
        )?;
        if data.unpublished_posts > 0 {
            write!(f, ", {} unpublished", data.unpublished_posts)?;
        }
        writeln!(f, ")\n")?;

        writeln!(f, "{:<12} {:>9}  CHANGE", "METRIC", "VALUE")?;
        for card in &data.cards {
            let change = match &card.change_display {
                Some(change) => format!("{} {}", change, trend_arrow(card.trend)),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:<12} {:>9}  {}",
                card.title, card.display_value, change
            )?;
        }

        if data.types.is_empty() {
            return Ok(());
        }

        writeln!(f, "\nBy type")?;
        writeln!(
            f,
            "{:<12} {:>6} {:>9} {:>9} {:>7}",
            "TYPE", "POSTS", "VIEWS", "LIKES", "SHARE"
        )?;
        for row in &data.types {
            writeln!(
                f,
                "{:<12} {:>6} {:>9} {:>9} {:>7}",
                row.post_type,
                row.posts,
                format_compact(row.views),
                format_compact(row.likes),
                format_percent(row.view_share * 100.0)
            )?;
        }

        Ok(())
    }
}
