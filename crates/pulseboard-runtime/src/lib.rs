pub mod config;
pub mod error;
pub mod feed;
pub mod session;
pub mod workspace;

pub use config::{BackendConfig, Config, DashboardConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use feed::{FeedError, FeedState, PostsFeed, SESSION_NOT_FOUND};
pub use session::{SessionStore, StoredSessionProvider};
pub use workspace::Pulseboard;
