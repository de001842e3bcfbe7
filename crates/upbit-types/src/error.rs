//! Error bodies returned by the exchange

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error payload Upbit sends with non-success responses:
/// `{"error": {"name": "...", "message": "..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitApiError {
    /// Machine-readable error name (e.g., "invalid_access_key")
    pub name: String,
    /// Human-readable description
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: UpbitApiError,
}

impl UpbitApiError {
    /// Parse an error body, `None` if the body is not in the exchange's error shape
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }

    /// True if the error is about the access key or token rather than the request
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.name.as_str(),
            "invalid_query_payload"
                | "jwt_verification"
                | "expired_access_key"
                | "nonce_used"
                | "no_authorization_i_p"
                | "out_of_scope"
                | "invalid_access_key"
        )
    }
}

impl fmt::Display for UpbitApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error":{"name":"invalid_access_key","message":"잘못된 엑세스 키입니다."}}"#;
        let err = UpbitApiError::from_body(body).unwrap();
        assert_eq!(err.name, "invalid_access_key");
        assert!(err.is_auth_error());
        assert!(err.to_string().starts_with("invalid_access_key: "));
    }

    #[test]
    fn test_non_error_body() {
        assert!(UpbitApiError::from_body("[]").is_none());
        assert!(UpbitApiError::from_body("<html>bad gateway</html>").is_none());
    }

    #[test]
    fn test_request_error_is_not_auth() {
        let err = UpbitApiError {
            name: "validation_error".to_string(),
            message: "market is missing".to_string(),
        };
        assert!(!err.is_auth_error());
    }
}
