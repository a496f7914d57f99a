//! Posts feed
//!
//! Owns the dashboard's view of the signed-in user's posts: the rows, a
//! loading flag and the last error message. Renderers read snapshots or
//! subscribe to changes; only `refresh` talks to the backend.
//!
//! ## Overlapping refreshes
//! Every call to `refresh` takes a new generation number. When a call
//! finishes, it writes its result only if no newer call has started in the
//! meantime, so the most recently *started* refresh always wins.

use pulseboard_backend::{PostQuery, PostsTable, SessionProvider};
use pulseboard_types::{PostRecord, sort_published_desc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, error};

/// Message shown when nobody is signed in
pub const SESSION_NOT_FOUND: &str = "Session not found";

/// Why a refresh did not produce rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// No current session
    SessionNotFound,
    /// The table query was rejected; message is the backend's, verbatim
    Query(String),
    /// Anything else (transport, decoding, session lookup)
    Unexpected(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::SessionNotFound => write!(f, "{}", SESSION_NOT_FOUND),
            FeedError::Query(msg) | FeedError::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

impl From<pulseboard_backend::Error> for FeedError {
    fn from(err: pulseboard_backend::Error) -> Self {
        match err {
            pulseboard_backend::Error::Query(query) => FeedError::Query(query.message),
            other => {
                error!(error = %other, "unexpected failure while loading posts");
                FeedError::Unexpected(other.message().to_string())
            }
        }
    }
}

/// Snapshot of the feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedState {
    pub data: Vec<PostRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

pub struct PostsFeed {
    sessions: Arc<dyn SessionProvider>,
    table: Arc<dyn PostsTable>,
    limit: Option<usize>,
    state: watch::Sender<FeedState>,
    generation: AtomicU64,
    mounted: AtomicBool,
}

impl PostsFeed {
    pub fn new(sessions: Arc<dyn SessionProvider>, table: Arc<dyn PostsTable>) -> Self {
        let (state, _) = watch::channel(FeedState::default());
        Self {
            sessions,
            table,
            limit: None,
            state,
            generation: AtomicU64::new(0),
            mounted: AtomicBool::new(false),
        }
    }

    /// Cap the number of rows requested per refresh
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Initial fetch. Runs at most once per feed; later calls return `false`.
    pub async fn mount(&self) -> bool {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return false;
        }
        // The outcome is recorded in state; callers of mount only watch state.
        let _ = self.refresh().await;
        true
    }

    /// Reload the posts.
    ///
    /// The returned result mirrors what this call observed, even when a newer
    /// refresh has since taken over and the result was not written to state.
    pub async fn refresh(&self) -> Result<usize, FeedError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let outcome = self.load().await;
        let count = outcome.as_ref().map(Vec::len).map_err(|err| err.clone());

        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            match outcome {
                Ok(rows) => state.data = rows,
                Err(err) => state.error = Some(err.to_string()),
            }
            state.is_loading = false;
            true
        });

        if !applied {
            debug!(generation, "discarding result of superseded refresh");
        }

        count
    }

    async fn load(&self) -> Result<Vec<PostRecord>, FeedError> {
        let session = self
            .sessions
            .current_session()
            .await?
            .ok_or(FeedError::SessionNotFound)?;

        let mut query = PostQuery::owned_by(session.user_id());
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }

        let mut rows = self.table.fetch_posts(&session, &query).await?;
        sort_published_desc(&mut rows);
        debug!(rows = rows.len(), user = %session.user.id, "posts loaded");
        Ok(rows)
    }
}
