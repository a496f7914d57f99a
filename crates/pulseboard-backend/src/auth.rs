use chrono::Utc;
use pulseboard_types::{Session, User};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::endpoint::build_http_client;
use crate::{Error, Result, SupabaseEndpoint};

/// GoTrue token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    refresh_token: Option<String>,
    user: User,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        // Older GoTrue versions only report a relative lifetime
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| Utc::now().timestamp() + secs));

        Session {
            access_token: self.access_token,
            token_type: self.token_type.unwrap_or_else(|| "bearer".to_string()),
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// GoTrue has shipped several error shapes over time
#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AuthErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

/// Client for the Supabase auth (GoTrue) API
pub struct AuthClient {
    http: reqwest::Client,
    endpoint: SupabaseEndpoint,
}

impl AuthClient {
    pub fn new(endpoint: SupabaseEndpoint) -> Result<Self> {
        Ok(Self {
            http: build_http_client()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &SupabaseEndpoint {
        &self.endpoint
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        info!(email, "signing in with password");
        self.token_grant("password", json!({ "email": email, "password": password }))
            .await
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session> {
        debug!("refreshing session");
        self.token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await
    }

    /// Revoke the session server-side
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint.auth_url("logout"))
            .header("apikey", self.endpoint.anon_key())
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(auth_error(response).await)
    }

    async fn token_grant(&self, grant_type: &str, body: serde_json::Value) -> Result<Session> {
        let response = self
            .http
            .post(self.endpoint.auth_url("token"))
            .query(&[("grant_type", grant_type)])
            .header("apikey", self.endpoint.anon_key())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(auth_error(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("Failed to parse token response: {}", e)))?;

        Ok(token.into_session())
    }
}

async fn auth_error(response: reqwest::Response) -> Error {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<AuthErrorBody>(&text)
        .ok()
        .and_then(AuthErrorBody::into_message)
        .unwrap_or_else(|| {
            if text.is_empty() {
                status.to_string()
            } else {
                text
            }
        });

    Error::Auth {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_in_fallback() {
        let json = r#"{
            "access_token": "a",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": { "id": "00000000-0000-0000-0000-000000000001" }
        }"#;
        let before = Utc::now().timestamp();
        let session = serde_json::from_str::<TokenResponse>(json)
            .unwrap()
            .into_session();

        let expires_at = session.expires_at.unwrap();
        assert!(expires_at >= before + 3600);
        assert_eq!(session.token_type, "bearer");
    }

    #[test]
    fn test_error_body_prefers_description() {
        let body: AuthErrorBody = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("Invalid login credentials")
        );
    }

    #[test]
    fn test_error_body_msg_shape() {
        let body: AuthErrorBody =
            serde_json::from_str(r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#)
                .unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("Invalid login credentials")
        );
    }
}
