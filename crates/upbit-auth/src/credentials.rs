//! Authentication credentials for Upbit API
//!
//! Implements HS256 JWT signing as required by Upbit's private endpoints.
//!
//! # Security
//!
//! Secret keys are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::Sha256;
use std::path::Path;
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::token::TokenPayload;

type HmacSha256 = Hmac<Sha256>;

/// Key file read when no other path is given
pub const DEFAULT_KEY_FILE: &str = "keys.json";

const JWT_ALG: &str = "HS256";
const JWT_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// On-disk key file layout
#[derive(Deserialize)]
struct KeyFile {
    #[serde(alias = "upbit_access")]
    access: String,
    #[serde(alias = "upbit_secret")]
    secret: String,
}

#[derive(Deserialize)]
struct JwtHeader {
    alg: String,
}

/// API credentials for authenticated requests
///
/// The secret key is zeroized when the Credentials are dropped.
#[derive(Clone)]
pub struct Credentials {
    /// Access key (public)
    access_key: String,
    /// Secret key (zeroized on drop)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an access key and secret key
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if either key is empty.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> AuthResult<Self> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();

        if access_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("access key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("secret key is empty".to_string()));
        }

        Ok(Self {
            access_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Load credentials from a JSON key file
    ///
    /// The file must hold an object with string fields `access` and `secret`
    /// (`upbit_access` / `upbit_secret` are accepted as well).
    pub fn from_file(path: impl AsRef<Path>) -> AuthResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| AuthError::KeyFile {
            path: path.to_path_buf(),
            source,
        })?;

        let keys: KeyFile =
            serde_json::from_str(&contents).map_err(|source| AuthError::KeyFormat {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded credentials from {}", path.display());
        Self::new(keys.access, keys.secret)
    }

    /// Create credentials from environment variables
    ///
    /// Reads `UPBIT_ACCESS_KEY` and `UPBIT_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let access_key = std::env::var("UPBIT_ACCESS_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("UPBIT_ACCESS_KEY".to_string()))?;
        let secret_key = std::env::var("UPBIT_SECRET_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("UPBIT_SECRET_KEY".to_string()))?;

        Self::new(access_key, secret_key)
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    fn mac(&self) -> AuthResult<HmacSha256> {
        HmacSha256::new_from_slice(self.secret_key.expose_secret().as_bytes())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))
    }

    /// Sign a payload into a compact HS256 JWT
    ///
    /// Token layout: `base64url(header).base64url(payload).base64url(signature)`
    /// where the signature is HMAC-SHA256 over the first two segments,
    /// keyed with the secret.
    pub fn sign(&self, payload: &TokenPayload) -> AuthResult<String> {
        let header = BASE64URL.encode(JWT_HEADER);
        let claims = BASE64URL.encode(serde_json::to_vec(payload)?);
        let signing_input = format!("{}.{}", header, claims);

        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        let signature = BASE64URL.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Verify a token signed with these credentials and return its payload
    ///
    /// Accepts the bare JWT or an `Authorization` value with a `Bearer ` prefix.
    pub fn verify(&self, token: &str) -> AuthResult<TokenPayload> {
        let token = token.strip_prefix("Bearer ").unwrap_or(token);

        let mut segments = token.split('.');
        let (header, claims, signature) = match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(h), Some(c), Some(s), None) => (h, c, s),
            _ => {
                return Err(AuthError::InvalidToken(
                    "expected three dot-separated segments".to_string(),
                ))
            }
        };

        let jwt_header: JwtHeader = decode_segment(header)?;
        if jwt_header.alg != JWT_ALG {
            return Err(AuthError::InvalidToken(format!(
                "unsupported algorithm {}",
                jwt_header.alg
            )));
        }

        let signature = BASE64URL
            .decode(signature)
            .map_err(|e| AuthError::InvalidToken(format!("signature is not base64url: {}", e)))?;

        let mut mac = self.mac()?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(claims.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::SignatureMismatch)?;

        decode_segment(claims)
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> AuthResult<T> {
    let bytes = BASE64URL
        .decode(segment)
        .map_err(|e| AuthError::InvalidToken(format!("segment is not base64url: {}", e)))?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.access_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("access_key", &format!("{}...", shown))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
