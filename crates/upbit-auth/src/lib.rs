//! Credential loading and request signing for Upbit's private API
//!
//! Private endpoints authenticate with an HS256 JWT sent as a bearer token.
//! This crate loads the access/secret key pair and produces those tokens.
//!
//! # Example
//!
//! ```no_run
//! use upbit_auth::{Credentials, TokenSigner, DEFAULT_KEY_FILE};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from ./keys.json
//!     let creds = Credentials::from_file(DEFAULT_KEY_FILE)?;
//!
//!     // One signer per request: each carries a fresh nonce
//!     let authorization = TokenSigner::new(&creds).bearer()?;
//!     println!("Authorization: {}", authorization);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod token;

pub use credentials::{Credentials, DEFAULT_KEY_FILE};
pub use error::{AuthError, AuthResult};
pub use token::{
    generate_nonce, query_hash, query_string, TokenPayload, TokenSigner, QUERY_HASH_ALG,
};
