use pulseboard_backend::{AuthClient, RestClient};
use pulseboard_types::Session;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::feed::PostsFeed;
use crate::session::{SessionStore, StoredSessionProvider};
use crate::{Config, Result};

/// Entry point tying configuration, session storage and backend clients
/// together for one data directory.
pub struct Pulseboard {
    data_dir: PathBuf,
    config: Config,
    auth: Arc<AuthClient>,
    store: SessionStore,
}

impl Pulseboard {
    /// Open a data directory. Fails when no backend is configured.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load(&data_dir)?;
        Self::with_config(data_dir, config)
    }

    pub fn with_config(data_dir: impl Into<PathBuf>, config: Config) -> Result<Self> {
        let data_dir = data_dir.into();
        let auth = AuthClient::new(config.endpoint()?)?;
        let store = SessionStore::new(&data_dir);

        Ok(Self {
            data_dir,
            config,
            auth: Arc::new(auth),
            store,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let session = self.auth.sign_in_with_password(email, password).await?;
        self.store.save(&session)?;
        info!(user = %session.user.id, "signed in");
        Ok(session)
    }

    /// Revoke the server session (best effort) and forget the local one.
    /// Returns whether a session was stored.
    pub async fn logout(&self) -> Result<bool> {
        let Some(session) = self.store.load()? else {
            return Ok(false);
        };

        if let Err(err) = self.auth.sign_out(&session.access_token).await {
            warn!(error = %err, "server-side sign out failed; removing local session anyway");
        }

        self.store.clear()
    }

    /// Session as stored on disk, without refreshing it
    pub fn stored_session(&self) -> Result<Option<Session>> {
        self.store.load()
    }

    pub fn session_provider(&self) -> Arc<StoredSessionProvider> {
        Arc::new(StoredSessionProvider::new(
            self.store.clone(),
            self.auth.clone(),
        ))
    }

    pub fn posts_feed(&self) -> Result<PostsFeed> {
        let table = RestClient::with_table(
            self.config.endpoint()?,
            self.config.backend.posts_table.clone(),
        )?;
        Ok(PostsFeed::new(self.session_provider(), Arc::new(table)))
    }
}
