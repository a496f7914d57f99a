//! TUI View Components
//!
//! Ratatui widgets for the dashboard. Each one wraps a reference to its view
//! model and only maps it onto the buffer:
//! - no calculations or formatting beyond layout
//! - colors come from `StatusLevel` and `Trend` here, nowhere else

pub mod analytics;
pub mod message;
pub mod metric_cards;
pub mod post_detail;
pub mod posts_table;
pub mod settings;
pub mod sidebar;
pub mod status_bar;

pub use analytics::AnalyticsView;
pub use message::MessageView;
pub use metric_cards::MetricCardsView;
pub use post_detail::PostDetailView;
pub use posts_table::PostsTableView;
pub use settings::SettingsView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use pulseboard_engine::Trend;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn trend_to_color(trend: Option<Trend>) -> Color {
    match trend {
        Some(Trend::Up) => Color::Green,
        Some(Trend::Down) => Color::Red,
        None => Color::DarkGray,
    }
}
