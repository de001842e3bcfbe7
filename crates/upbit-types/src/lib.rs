//! Shared types for Upbit's REST API
//!
//! This crate provides the wire types used across the workspace.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Market`] - Market codes (e.g., "KRW-BTC")
//! - [`CandleRecord`] - A candle exactly as received
//! - [`DayCandle`] - Typed daily candle with decimal prices
//! - [`Account`], [`OrderChance`] - Private account data
//! - [`UpbitApiError`] - Error body returned by the exchange
//! - [`MovingAverage`], [`predict_cross`] - Moving-average crossover signal

pub mod account;
pub mod candle;
pub mod error;
pub mod ma;
pub mod market;

pub use account::*;
pub use candle::*;
pub use error::*;
pub use ma::*;
pub use market::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
