pub mod account;
pub mod posts;
pub mod summary;
pub mod tui;

pub use account::AccountView;
pub use posts::PostListView;
pub use summary::SummaryView;
