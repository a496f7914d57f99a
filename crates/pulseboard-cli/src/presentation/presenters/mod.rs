//! Presenters: pure functions from domain data to view models.

pub mod account;
pub mod config;
pub mod posts;
pub mod screen;
pub mod summary;

pub use account::{present_login, present_logout, present_whoami};
pub use config::{
    present_config, present_config_saved, present_config_show, present_guidance, present_settings,
};
pub use posts::{present_post_list, present_post_row, present_table_row};
pub use screen::{ScreenContext, present_screen};
pub use summary::{present_metric_card, present_summary};
