use std::fmt;

/// Result type for pulseboard-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Identifier was not a valid UUID
    InvalidId(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidId(value) => write!(f, "Invalid identifier: {}", value),
        }
    }
}

impl std::error::Error for Error {}
