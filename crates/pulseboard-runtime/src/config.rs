use crate::{Error, Result};
use pulseboard_backend::SupabaseEndpoint;
use pulseboard_types::{MAX_WINDOW_DAYS, POSTS_TABLE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

pub const ENV_DATA_PATH: &str = "PULSEBOARD_PATH";
pub const ENV_URL: &str = "PULSEBOARD_URL";
pub const ENV_ANON_KEY: &str = "PULSEBOARD_ANON_KEY";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PULSEBOARD_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.pulseboard (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(ENV_DATA_PATH) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("pulseboard"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pulseboard"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_posts_table() -> String {
    POSTS_TABLE.to_string()
}

fn default_window_days() -> i64 {
    7
}

fn default_recent_limit() -> usize {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,
    #[serde(default = "default_posts_table")]
    pub posts_table: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            posts_table: default_posts_table(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Length of each comparison window on the overview cards
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// Rows shown in the overview's recent posts list
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Err(Error::Config(format!(
                "dashboard.window_days must be between 1 and {} (got {})",
                MAX_WINDOW_DAYS, self.window_days
            )));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            recent_limit: default_recent_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load `<data_dir>/config.toml` and apply environment overrides
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::load_from(&data_dir.join(CONFIG_FILE))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.dashboard.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Environment wins over the file for the backend URL and key
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_URL).filter(|v| !v.is_empty()) {
            self.backend.url = Some(url);
        }
        if let Some(key) = lookup(ENV_ANON_KEY).filter(|v| !v.is_empty()) {
            self.backend.anon_key = Some(key);
        }
    }

    pub fn endpoint(&self) -> Result<SupabaseEndpoint> {
        let url = self.backend.url.as_deref().ok_or_else(|| {
            Error::NotConfigured(format!(
                "no backend URL (run `pulseboard config init` or set {})",
                ENV_URL
            ))
        })?;
        let key = self.backend.anon_key.as_deref().ok_or_else(|| {
            Error::NotConfigured(format!(
                "no API key (run `pulseboard config init` or set {})",
                ENV_ANON_KEY
            ))
        })?;
        Ok(SupabaseEndpoint::new(url, key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.backend.posts_table, "posts");
        assert_eq!(config.dashboard.window_days, 7);
        assert_eq!(config.dashboard.recent_limit, 10);
        assert!(config.backend.url.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.backend.url = Some("https://abc.supabase.co".to_string());
        config.backend.anon_key = Some("anon".to_string());
        config.dashboard.window_days = 30;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[backend]\nurl = \"https://abc.supabase.co\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.backend.posts_table, "posts");
        assert_eq!(loaded.dashboard, DashboardConfig::default());
        Ok(())
    }

    #[test]
    fn test_out_of_range_window_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        for window in ["0", "1000000000"] {
            std::fs::write(
                &config_path,
                format!("[dashboard]\nwindow_days = {}\n", window),
            )?;
            let err = Config::load_from(&config_path).unwrap_err();
            assert!(matches!(err, Error::Config(_)));
            assert!(err.to_string().contains("dashboard.window_days"));
        }

        std::fs::write(&config_path, "[dashboard]\nwindow_days = 3650\n")?;
        assert_eq!(Config::load_from(&config_path)?.dashboard.window_days, 3650);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::default();
        config.backend.url = Some("https://file.supabase.co".to_string());

        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_URL, "https://env.supabase.co"),
            (ENV_ANON_KEY, ""),
        ]);
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.backend.url.as_deref(),
            Some("https://env.supabase.co")
        );
        assert_eq!(config.backend.anon_key, None);
    }

    #[test]
    fn test_endpoint_requires_url_and_key() {
        let config = Config::default();
        assert!(matches!(config.endpoint(), Err(Error::NotConfigured(_))));

        let mut config = Config::default();
        config.backend.url = Some("https://abc.supabase.co".to_string());
        config.backend.anon_key = Some("anon".to_string());
        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.base_url(), "https://abc.supabase.co");
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/tmp/data"), PathBuf::from("/tmp/data"));
    }
}
