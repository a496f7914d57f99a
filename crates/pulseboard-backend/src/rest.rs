use async_trait::async_trait;
use pulseboard_types::{POSTS_TABLE, PostRecord, Session};
use tracing::{debug, warn};

use crate::endpoint::build_http_client;
use crate::{Error, PostQuery, PostsTable, QueryError, Result, SupabaseEndpoint};

/// PostgREST client bound to one table
pub struct RestClient {
    http: reqwest::Client,
    endpoint: SupabaseEndpoint,
    table: String,
}

impl RestClient {
    pub fn new(endpoint: SupabaseEndpoint) -> Result<Self> {
        Self::with_table(endpoint, POSTS_TABLE)
    }

    pub fn with_table(endpoint: SupabaseEndpoint, table: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: build_http_client()?,
            endpoint,
            table: table.into(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl PostsTable for RestClient {
    async fn fetch_posts(&self, session: &Session, query: &PostQuery) -> Result<Vec<PostRecord>> {
        let url = self.endpoint.rest_url(&self.table);
        debug!(table = %self.table, owner = %query.owner, "querying posts");

        let response = self
            .http
            .get(&url)
            .query(&query.to_query_pairs())
            .header("apikey", self.endpoint.anon_key())
            .header("Accept", "application/json")
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let error = serde_json::from_str::<QueryError>(&text).unwrap_or_else(|_| {
                if text.is_empty() {
                    QueryError::new(status.to_string())
                } else {
                    QueryError::new(text)
                }
            });
            warn!(status = status.as_u16(), message = %error.message, "posts query rejected");
            return Err(Error::Query(error));
        }

        let rows: Vec<PostRecord> = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("Failed to parse posts response: {}", e)))?;

        debug!(rows = rows.len(), "posts query returned");
        Ok(rows)
    }
}
