use pulseboard_engine::Trend;
use serde::Serialize;
use std::fmt;

use super::CsvExport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCardViewModel {
    pub title: String,
    pub value: f64,
    pub display_value: String,
    pub previous: Option<f64>,
    pub change_percent: f64,
    /// Absent when there is no trend to show
    pub change_display: Option<String>,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRowViewModel {
    pub post_type: String,
    pub posts: usize,
    pub views: i64,
    pub likes: i64,
    /// Fraction of all views, 0.0 to 1.0
    pub view_share: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryViewModel {
    pub window_days: i64,
    pub total_posts: usize,
    pub unpublished_posts: usize,
    pub cards: Vec<MetricCardViewModel>,
    pub types: Vec<TypeRowViewModel>,
}

impl fmt::Display for SummaryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::SummaryView;
        write!(f, "{}", SummaryView::new(self))
    }
}

impl CsvExport for SummaryViewModel {
    fn csv_header(&self) -> Vec<&'static str> {
        vec!["metric", "value", "previous", "change_percent", "trend"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.cards
            .iter()
            .map(|card| {
                vec![
                    card.title.clone(),
                    card.value.to_string(),
                    card.previous.map(|p| p.to_string()).unwrap_or_default(),
                    format!("{:.2}", card.change_percent),
                    match card.trend {
                        Some(Trend::Up) => "up".to_string(),
                        Some(Trend::Down) => "down".to_string(),
                        None => String::new(),
                    },
                ]
            })
            .collect()
    }
}
