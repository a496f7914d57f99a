pub mod account;
pub mod common;
pub mod config;
pub mod guidance;
pub mod posts;
pub mod result;
pub mod summary;
pub mod tui;

pub use account::{AccountViewModel, LogoutViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use guidance::GuidanceViewModel;
pub use posts::{PostListViewModel, PostRowViewModel};
pub use result::CommandResultViewModel;
pub use summary::{MetricCardViewModel, SummaryViewModel, TypeRowViewModel};
pub use tui::{
    AnalyticsRowViewModel, AnalyticsViewModel, NavEntryViewModel, OverviewViewModel,
    PageViewModel, PostDetailViewModel, PostTableRowViewModel, PostTableViewModel,
    ScreenViewModel, SettingsViewModel, SidebarViewModel, StatusBarViewModel,
};

/// Tabular form of a view model for `--format csv`
pub trait CsvExport {
    fn csv_header(&self) -> Vec<&'static str>;
    fn csv_rows(&self) -> Vec<Vec<String>>;
}
