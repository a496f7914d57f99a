use serde::Deserialize;
use std::fmt;

/// Result type for pulseboard-backend operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by PostgREST for a rejected query
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }
}

/// Error types that can occur in the backend layer
#[derive(Debug)]
pub enum Error {
    /// Request never produced a response (DNS, TLS, connection reset, timeout)
    Transport(String),

    /// Response body did not match the expected shape
    Decode(String),

    /// Table query rejected by the REST service
    Query(QueryError),

    /// Auth service rejected the request
    Auth { status: u16, message: String },

    /// Endpoint or client misconfiguration
    Config(String),
}

impl Error {
    /// Human-facing message without the category prefix.
    ///
    /// This is what the dashboard shows; `Display` adds the category for logs.
    pub fn message(&self) -> &str {
        match self {
            Error::Transport(msg) | Error::Decode(msg) | Error::Config(msg) => msg,
            Error::Query(err) => &err.message,
            Error::Auth { message, .. } => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::Query(err) => match &err.code {
                Some(code) => write!(f, "Query error [{}]: {}", code, err.message),
                None => write!(f, "Query error: {}", err.message),
            },
            Error::Auth { status, message } => {
                write!(f, "Auth error (HTTP {}): {}", status, message)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_has_no_prefix() {
        let err = Error::Query(QueryError::new("permission denied for table posts"));
        assert_eq!(err.message(), "permission denied for table posts");
        assert_eq!(
            err.to_string(),
            "Query error: permission denied for table posts"
        );
    }

    #[test]
    fn test_query_error_display_includes_code() {
        let body = r#"{"message":"relation \"public.postz\" does not exist","code":"42P01","details":null,"hint":null}"#;
        let parsed: QueryError = serde_json::from_str(body).unwrap();
        let err = Error::Query(parsed);
        assert_eq!(
            err.to_string(),
            "Query error [42P01]: relation \"public.postz\" does not exist"
        );
    }

    #[test]
    fn test_transport_message_is_verbatim() {
        let err = Error::Transport("network down".to_string());
        assert_eq!(err.message(), "network down");
    }
}
