//! In-memory stand-ins for the backend traits.

use async_trait::async_trait;
use pulseboard_backend::{Error, PostQuery, PostsTable, QueryError, Result, SessionProvider};
use pulseboard_types::{PostRecord, Session, sort_published_desc};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Session provider holding at most one session in memory
#[derive(Default)]
pub struct InMemorySessionProvider {
    session: Mutex<Option<Session>>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl InMemorySessionProvider {
    pub fn signed_in(session: Session) -> Self {
        let provider = Self::default();
        provider.set(Some(session));
        provider
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn set(&self, session: Option<Session>) {
        *self.session.lock().unwrap() = session;
    }

    /// Make every lookup fail with a transport error carrying `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current_session(&self) -> Result<Option<Session>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::Transport(message));
        }
        Ok(self.session.lock().unwrap().clone())
    }
}

/// One scripted response for [`InMemoryPostsTable`]
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Return exactly these rows, in this order
    Rows(Vec<PostRecord>),
    /// Fail as a rejected query with this message
    QueryError(String),
    /// Fail as a transport error with this message
    TransportError(String),
}

/// Posts table backed by a `Vec`.
///
/// Without a script it behaves like the real table: filters by owner, orders
/// by `published_at` descending (unpublished last) and applies the limit.
/// Scripted steps are consumed one per call, each after an optional delay.
#[derive(Default)]
pub struct InMemoryPostsTable {
    rows: Mutex<Vec<PostRecord>>,
    script: Mutex<VecDeque<(Duration, Scripted)>>,
    last_query: Mutex<Option<PostQuery>>,
    calls: AtomicUsize,
    claimed: AtomicUsize,
}

impl InMemoryPostsTable {
    pub fn with_rows(rows: Vec<PostRecord>) -> Self {
        let table = Self::default();
        *table.rows.lock().unwrap() = rows;
        table
    }

    pub fn set_rows(&self, rows: Vec<PostRecord>) {
        *self.rows.lock().unwrap() = rows;
    }

    pub fn push(&self, step: Scripted) {
        self.push_delayed(Duration::ZERO, step);
    }

    pub fn push_delayed(&self, delay: Duration, step: Scripted) {
        self.script.lock().unwrap().push_back((delay, step));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Scripted steps taken off the queue so far. A step counts as claimed
    /// before its delay starts.
    pub fn claimed_steps(&self) -> usize {
        self.claimed.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<PostQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostsTable for InMemoryPostsTable {
    async fn fetch_posts(&self, _session: &Session, query: &PostQuery) -> Result<Vec<PostRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());

        let step = self.script.lock().unwrap().pop_front();
        if let Some((delay, scripted)) = step {
            self.claimed.fetch_add(1, Ordering::SeqCst);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            return match scripted {
                Scripted::Rows(rows) => Ok(rows),
                Scripted::QueryError(message) => Err(Error::Query(QueryError::new(message))),
                Scripted::TransportError(message) => Err(Error::Transport(message)),
            };
        }

        let mut rows: Vec<PostRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.user_id == query.owner)
            .cloned()
            .collect();
        sort_published_desc(&mut rows);
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn test_table_filters_by_owner_and_orders() {
        let table = InMemoryPostsTable::with_rows(fixtures::mixed_owner_posts());
        let session = fixtures::session_for(1);
        let query = PostQuery::owned_by(fixtures::user_id(1));

        let rows = table.fetch_posts(&session, &query).await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                fixtures::post_id(3),
                fixtures::post_id(2),
                fixtures::post_id(1)
            ]
        );
        assert_eq!(table.calls(), 1);
    }

    #[tokio::test]
    async fn test_script_is_consumed_in_order() {
        let table = InMemoryPostsTable::default();
        table.push(Scripted::QueryError("boom".to_string()));
        let session = fixtures::session_for(1);
        let query = PostQuery::owned_by(fixtures::user_id(1));

        let err = table.fetch_posts(&session, &query).await.unwrap_err();
        assert_eq!(err.message(), "boom");
        assert!(table.fetch_posts(&session, &query).await.unwrap().is_empty());
        assert_eq!(table.calls(), 2);
        assert_eq!(table.claimed_steps(), 1);
    }

    #[tokio::test]
    async fn test_step_is_claimed_before_its_delay() {
        let table = std::sync::Arc::new(InMemoryPostsTable::default());
        table.push_delayed(Duration::from_millis(200), Scripted::Rows(Vec::new()));
        table.push(Scripted::QueryError("second".to_string()));

        let slow = {
            let table = table.clone();
            tokio::spawn(async move {
                let session = fixtures::session_for(1);
                table
                    .fetch_posts(&session, &PostQuery::owned_by(fixtures::user_id(1)))
                    .await
            })
        };
        while table.claimed_steps() == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        // the delayed step is already off the queue, so this call gets the next one
        let session = fixtures::session_for(1);
        let err = table
            .fetch_posts(&session, &PostQuery::owned_by(fixtures::user_id(1)))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "second");
        assert!(slow.await.unwrap().unwrap().is_empty());
    }
}
