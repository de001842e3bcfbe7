//! REST API client for the Upbit cryptocurrency exchange
//!
//! # Features
//!
//! - **Market Data**: daily candles, raw or typed
//! - **Account**: balances, order availability
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Every private request carries a
//! freshly signed HS256 JWT (see `upbit-auth`).
//!
//! # Example
//!
//! ```no_run
//! use upbit_rest::{CandleQuery, UpbitRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = UpbitRestClient::new()?;
//!     let candles = client
//!         .get_day_candles(&CandleQuery::new("KRW-BTC").with_count(10))
//!         .await?;
//!     println!("Got {} candles", candles.len());
//!
//!     // Private endpoints (auth required)
//!     let auth_client = UpbitRestClient::from_key_file("keys.json")?;
//!     let raw = auth_client.get_accounts_raw().await?;
//!     println!("{}", raw.text());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure model
//!
//! Nothing is retried. Transport failures, non-success statuses and bad
//! bodies each come back as a distinct [`RestError`] variant.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, UpbitRestClient, DEFAULT_BASE_URL};
pub use endpoints::{AccountEndpoints, CandleBatches, CandleQuery, CandleRange, MarketEndpoints};
pub use error::{RestError, RestResult};
pub use types::RawResponse;

pub use upbit_auth::{Credentials, DEFAULT_KEY_FILE};
pub use upbit_types::{Account, CandleRecord, DayCandle, Market, OrderChance, UpbitApiError};
