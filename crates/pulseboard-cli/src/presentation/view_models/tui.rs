//! Dashboard screen view models.
//!
//! Everything a widget prints is already a string here; widgets only decide
//! where it goes and which color it gets.

use super::common::StatusLevel;
use super::summary::MetricCardViewModel;

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntryViewModel {
    pub icon: &'static str,
    pub name: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarViewModel {
    pub items: Vec<NavEntryViewModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostTableRowViewModel {
    pub short_id: String,
    pub published: String,
    pub post_type: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub engagement: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostTableViewModel {
    pub title: String,
    pub rows: Vec<PostTableRowViewModel>,
    /// Highlighted row; `None` when the table is not focusable
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewViewModel {
    pub cards_title: String,
    pub cards: Vec<MetricCardViewModel>,
    pub recent: PostTableViewModel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostDetailViewModel {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsRowViewModel {
    pub post_type: String,
    pub posts: String,
    pub views: String,
    pub likes: String,
    /// Fraction of all views, 0.0 to 1.0
    pub share: f64,
    pub share_display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsViewModel {
    pub title: String,
    pub rows: Vec<AnalyticsRowViewModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsViewModel {
    pub entries: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageViewModel {
    /// Full-page notice (first load, empty list, unknown route)
    Message {
        title: String,
        text: String,
        level: StatusLevel,
    },
    Overview(OverviewViewModel),
    Posts(PostTableViewModel),
    PostDetail(PostDetailViewModel),
    Analytics(AnalyticsViewModel),
    Settings(SettingsViewModel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarViewModel {
    pub level: StatusLevel,
    pub message: String,
    pub record_count: usize,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenViewModel {
    pub sidebar: SidebarViewModel,
    pub page: PageViewModel,
    pub status_bar: StatusBarViewModel,
}
