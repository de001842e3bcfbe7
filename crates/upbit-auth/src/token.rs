//! Bearer token construction
//!
//! Every private request carries a fresh JWT whose payload names the access
//! key and a single-use nonce. Requests with query parameters also embed a
//! SHA-512 hash of the query string so the signature covers them.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use uuid::Uuid;

use crate::credentials::Credentials;
use crate::error::AuthResult;

/// Hash algorithm name expected in `query_hash_alg`
pub const QUERY_HASH_ALG: &str = "SHA512";

/// JWT claims for a private request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub access_key: String,
    /// UUID v4, never reused
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash_alg: Option<String>,
}

impl TokenPayload {
    pub fn new(access_key: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            nonce: nonce.into(),
            query_hash: None,
            query_hash_alg: None,
        }
    }

    /// Attach the hash of a query string
    pub fn with_query_hash(mut self, query: &str) -> Self {
        self.query_hash = Some(query_hash(query));
        self.query_hash_alg = Some(QUERY_HASH_ALG.to_string());
        self
    }
}

/// Generate a random v4 UUID nonce
pub fn generate_nonce() -> String {
    Uuid::new_v4().to_string()
}

/// Lowercase hex SHA-512 of a query string
pub fn query_hash(query: &str) -> String {
    hex::encode(Sha512::digest(query.as_bytes()))
}

/// Join parameters into the unescaped `k=v&k=v` form the exchange hashes
pub fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Token signer for building authenticated requests
///
/// Holds the payload for exactly one request; build a new signer per call.
#[derive(Debug)]
pub struct TokenSigner<'a> {
    credentials: &'a Credentials,
    payload: TokenPayload,
}

impl<'a> TokenSigner<'a> {
    /// Create a new signer with a fresh nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            payload: TokenPayload::new(credentials.access_key(), generate_nonce()),
        }
    }

    /// Cover the request's query string; empty queries are not hashed
    pub fn with_query(mut self, query: &str) -> Self {
        if !query.is_empty() {
            self.payload = self.payload.with_query_hash(query);
        }
        self
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.payload.nonce
    }

    pub fn payload(&self) -> &TokenPayload {
        &self.payload
    }

    /// Signed JWT
    pub fn sign(&self) -> AuthResult<String> {
        self.credentials.sign(&self.payload)
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> AuthResult<String> {
        Ok(format!("Bearer {}", self.sign()?))
    }
}
