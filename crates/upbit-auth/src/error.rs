//! Error types for authentication operations

use std::path::PathBuf;

/// Errors that can occur while loading credentials or signing tokens
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Key file missing or unreadable
    #[error("Failed to read key file {}: {source}", .path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key file is not a JSON object with `access` and `secret`
    #[error("Malformed key file {}: {source}", .path.display())]
    KeyFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Token is not a well-formed HS256 JWT
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token signature does not match the secret
    #[error("Token signature mismatch")]
    SignatureMismatch,

    /// Payload (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
