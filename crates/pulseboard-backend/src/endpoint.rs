use reqwest::Url;
use std::time::Duration;

use crate::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client shared by the auth and REST adapters
pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("pulseboard/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Project URL plus the public (anon) API key sent with every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseEndpoint {
    base_url: String,
    anon_key: String,
}

impl SupabaseEndpoint {
    pub fn new(url: &str, anon_key: &str) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|e| Error::Config(format!("Invalid URL '{}': {}", url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(format!(
                "Unsupported URL scheme '{}' (expected http or https)",
                parsed.scheme()
            )));
        }

        if anon_key.trim().is_empty() {
            return Err(Error::Config("API key is empty".to_string()));
        }

        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// `{base}/auth/v1/{path}`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `{base}/rest/v1/{table}`
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let endpoint = SupabaseEndpoint::new("https://abc.supabase.co/", "anon").unwrap();
        assert_eq!(
            endpoint.auth_url("token"),
            "https://abc.supabase.co/auth/v1/token"
        );
        assert_eq!(
            endpoint.rest_url("posts"),
            "https://abc.supabase.co/rest/v1/posts"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = SupabaseEndpoint::new("ftp://abc.supabase.co", "anon").unwrap_err();
        assert!(err.to_string().contains("Unsupported URL scheme"));
    }

    #[test]
    fn test_rejects_empty_key() {
        assert!(SupabaseEndpoint::new("https://abc.supabase.co", "  ").is_err());
    }
}
