use async_trait::async_trait;
use pulseboard_types::{PostRecord, Session};

use crate::{PostQuery, Result};

/// Read access to the current authentication session
///
/// Responsibilities:
/// - Issue and refresh sessions (implementation detail of the provider)
/// - Hand out the current session, or `None` when nobody is signed in
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self) -> Result<Option<Session>>;
}

/// Filtered, ordered reads against the posts table
#[async_trait]
pub trait PostsTable: Send + Sync {
    async fn fetch_posts(&self, session: &Session, query: &PostQuery) -> Result<Vec<PostRecord>>;
}
