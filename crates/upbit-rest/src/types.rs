//! Response types shared by all endpoints

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::warn;

use crate::error::{RestError, RestResult};

/// Response body exactly as received, with its status
///
/// The body is kept as bytes; nothing is decoded until a caller asks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Drain a reqwest response
    pub async fn read(response: reqwest::Response) -> RestResult<Self> {
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(Self { status, body })
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body as JSON
    ///
    /// A non-success status is reported and returned as [`RestError::Status`]
    /// without touching the body.
    pub fn into_json<T: DeserializeOwned>(self) -> RestResult<T> {
        if !self.is_success() {
            warn!("Unable to get data: server responded with {}", self.status);
            return Err(RestError::from_status(self.status, self.text().into_owned()));
        }

        serde_json::from_slice(&self.body).map_err(|e| RestError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_json_success() {
        let raw = RawResponse::new(StatusCode::OK, "[1, 2, 3]");
        let values: Vec<u32> = raw.into_json().unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_into_json_status_error_keeps_body() {
        let raw = RawResponse::new(StatusCode::TOO_MANY_REQUESTS, "Too many API requests.");
        let err = raw.into_json::<Vec<u32>>().unwrap_err();

        match err {
            RestError::Status { status, body, .. } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, "Too many API requests.");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_body_kept_as_bytes() {
        let raw = RawResponse::new(StatusCode::OK, vec![b'[', 0xff, 0xfe, b']']);
        assert_eq!(raw.body, [b'[', 0xff, 0xfe, b']']);
        assert_eq!(raw.text(), "[\u{fffd}\u{fffd}]");
    }

    #[test]
    fn test_into_json_parse_error() {
        let raw = RawResponse::new(StatusCode::OK, "{not json");
        assert!(matches!(
            raw.into_json::<Vec<u32>>(),
            Err(RestError::Parse(_))
        ));
    }
}
