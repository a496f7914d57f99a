use async_trait::async_trait;
use chrono::{Duration, Utc};
use pulseboard_backend::{AuthClient, SessionProvider};
use pulseboard_types::Session;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{Error, Result};

pub const SESSION_FILE: &str = "session.json";

/// Refresh this long before the access token actually expires
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// Persisted session in `<data_dir>/session.json`
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&content).map_err(|e| {
            Error::Session(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)
            .map_err(|e| Error::Session(format!("Failed to serialize session: {}", e)))?;
        write_private(&self.path, content.as_bytes())?;
        Ok(())
    }

    /// Returns whether a session file was removed
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)?;
        Ok(true)
    }
}

#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.write_all(content)
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, content)
}

/// Session provider backed by the on-disk store.
///
/// Hands out the stored session, refreshing it through the auth service when
/// the access token is about to expire.
pub struct StoredSessionProvider {
    store: SessionStore,
    auth: Arc<AuthClient>,
}

impl StoredSessionProvider {
    pub fn new(store: SessionStore, auth: Arc<AuthClient>) -> Self {
        Self { store, auth }
    }
}

#[async_trait]
impl SessionProvider for StoredSessionProvider {
    async fn current_session(&self) -> pulseboard_backend::Result<Option<Session>> {
        let stored = self
            .store
            .load()
            .map_err(|e| pulseboard_backend::Error::Config(e.to_string()))?;

        let Some(session) = stored else {
            debug!("no stored session");
            return Ok(None);
        };

        if !session.is_expired(Utc::now(), Duration::seconds(EXPIRY_LEEWAY_SECS)) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.as_deref() else {
            warn!("stored session expired and has no refresh token");
            return Ok(None);
        };

        let refreshed = self.auth.refresh_session(refresh_token).await?;
        self.store
            .save(&refreshed)
            .map_err(|e| pulseboard_backend::Error::Config(e.to_string()))?;
        info!(user = %refreshed.user.id, "session refreshed");

        Ok(Some(refreshed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulseboard_types::{User, UserId};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            access_token: "access".to_string(),
            token_type: "bearer".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_at: Some(1_900_000_000),
            user: User {
                id: UserId::new(Uuid::from_u128(1)),
                email: Some("ana@example.com".to_string()),
            },
        }
    }

    #[test]
    fn test_store_roundtrip_and_clear() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = SessionStore::new(temp_dir.path());

        assert_eq!(store.load()?, None);
        store.save(&session())?;
        assert_eq!(store.load()?, Some(session()));

        assert!(store.clear()?);
        assert!(!store.clear()?);
        assert_eq!(store.load()?, None);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_store_file_is_private() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new()?;
        let store = SessionStore::new(temp_dir.path());
        store.save(&session())?;

        let mode = std::fs::metadata(store.path())?.permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_session_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = SessionStore::new(temp_dir.path());
        std::fs::write(store.path(), "{not json")?;

        assert!(matches!(store.load(), Err(Error::Session(_))));
        Ok(())
    }
}
