//! Market codes (KRW-BTC format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upbit market code: quote currency first, then base (`KRW-BTC`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Market(String);

impl Market {
    /// Bitcoin quoted in Korean won
    pub const KRW_BTC: &'static str = "KRW-BTC";
    /// Ether quoted in Korean won
    pub const KRW_ETH: &'static str = "KRW-ETH";
    /// Ether quoted in bitcoin
    pub const BTC_ETH: &'static str = "BTC-ETH";
    /// Bitcoin quoted in tether
    pub const USDT_BTC: &'static str = "USDT-BTC";

    /// Create a market without validating its format
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Quote currency (e.g., "KRW" from "KRW-BTC")
    pub fn quote(&self) -> Option<&str> {
        self.0.split_once('-').map(|(quote, _)| quote)
    }

    /// Base currency (e.g., "BTC" from "KRW-BTC")
    pub fn base(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, base)| base)
    }

    /// Check the code against the same rules as [`FromStr`]
    pub fn validate(&self) -> Result<(), MarketParseError> {
        self.0.parse::<Market>().map(drop)
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new(Self::KRW_BTC)
    }
}

impl FromStr for Market {
    type Err = MarketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (quote, base) = s
            .split_once('-')
            .ok_or_else(|| MarketParseError::MissingDash(s.to_string()))?;

        if quote.is_empty() || base.is_empty() {
            return Err(MarketParseError::EmptyPart(s.to_string()));
        }

        if base.contains('-') {
            return Err(MarketParseError::InvalidFormat(s.to_string()));
        }

        let valid = |part: &str| part.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if !valid(quote) || !valid(base) {
            return Err(MarketParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Market {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unchecked conversion, like [`Market::new`]; call [`Market::validate`]
/// or parse instead when the input is untrusted.
impl From<&str> for Market {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Error parsing a market code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketParseError {
    #[error("Market must contain '-': {0}")]
    MissingDash(String),

    #[error("Invalid market format: {0}")]
    InvalidFormat(String),

    #[error("Market has empty quote or base: {0}")]
    EmptyPart(String),
}
