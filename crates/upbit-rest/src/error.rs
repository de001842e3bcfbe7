//! Error types for REST API operations

use reqwest::StatusCode;
use upbit_auth::AuthError;
use upbit_types::UpbitApiError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport failure (DNS, connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange answered with a non-success status
    #[error(
        "Request failed with status {status}{}",
        .api_error.as_ref().map(|e| format!(": {}", e)).unwrap_or_default()
    )]
    Status {
        status: StatusCode,
        /// Raw response body
        body: String,
        /// Parsed error body, if the exchange sent one
        api_error: Option<UpbitApiError>,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Loading credentials or signing failed
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl RestError {
    /// Build a status error from a response body
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let api_error = UpbitApiError::from_body(&body);
        Self::Status {
            status,
            body,
            api_error,
        }
    }

    /// HTTP status, if the exchange answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Parsed exchange error, if any
    pub fn api_error(&self) -> Option<&UpbitApiError> {
        match self {
            Self::Status { api_error, .. } => api_error.as_ref(),
            _ => None,
        }
    }

    /// Check if the request never got a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Check if this error is about credentials or the token
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Auth(_) | Self::AuthRequired => true,
            Self::Status {
                status, api_error, ..
            } => {
                *status == StatusCode::UNAUTHORIZED
                    || api_error.as_ref().is_some_and(UpbitApiError::is_auth_error)
            }
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
