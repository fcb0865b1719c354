/// Error types for the data source
use thiserror::Error;

/// Failures while talking to the backend.
///
/// Authentication failures are a separate variant so callers can tell a
/// bad key apart from an outage.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Missing or placeholder configuration
    #[error("Invalid Supabase configuration: {0}")]
    Config(String),

    /// Transport-level failure (DNS, TLS, connection, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the API key
    #[error("Supabase rejected the credentials for '{table}' (HTTP {status})")]
    Auth { table: String, status: u16 },

    /// Any other non-success status
    #[error("Supabase returned HTTP {status} for '{table}': {body}")]
    Status {
        table: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected row shape
    #[error("Failed to decode '{table}' rows: {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn is_auth(&self) -> bool {
        matches!(self, SourceError::Auth { .. })
    }
}

/// Type alias for Results using SourceError
pub type Result<T> = std::result::Result<T, SourceError>;
