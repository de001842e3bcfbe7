//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, CandleQuery, CandleRange, MarketEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::RawResponse;
use reqwest::{Client, Url};
use std::path::Path;
use std::time::Duration;
use tracing::info;
use upbit_auth::Credentials;
use upbit_types::{Account, CandleRecord, DayCandle, Market, OrderChance};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.upbit.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("upbit-rest/", env!("CARGO_PKG_VERSION"));

/// Upbit REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use upbit_rest::{CandleQuery, UpbitRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = UpbitRestClient::new()?;
///     let candles = client.get_day_candles(&CandleQuery::new("KRW-BTC")).await?;
///
///     // With authentication for private endpoints
///     let auth_client = UpbitRestClient::from_key_file("keys.json")?;
///     let accounts = auth_client.get_accounts().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct UpbitRestClient {
    http_client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl UpbitRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a client with credentials read from a JSON key file
    ///
    /// Fails before any network activity if the file is missing or malformed.
    pub fn from_key_file(path: impl AsRef<Path>) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().load_credentials(path)?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| RestError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        info!("Created Upbit REST client for {}", base_url);

        Ok(Self {
            http_client,
            base_url,
            credentials: config.credentials,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.base_url)
    }

    /// Get daily candles as raw records
    pub async fn get_day_candles(&self, query: &CandleQuery) -> RestResult<Vec<CandleRecord>> {
        self.market().get_day_candles(query).await
    }

    /// Get every daily candle in a date range
    pub async fn get_day_candles_range(&self, range: &CandleRange) -> RestResult<Vec<CandleRecord>> {
        self.market().get_day_candles_range(range).await
    }

    /// Get daily candles as typed values
    pub async fn get_day_candles_typed(&self, query: &CandleQuery) -> RestResult<Vec<DayCandle>> {
        self.market().get_day_candles_typed(query).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(&self.http_client, &self.base_url, creds))
    }

    /// Get account balances, body untouched
    pub async fn get_accounts_raw(&self) -> RestResult<RawResponse> {
        self.account()?.get_accounts_raw().await
    }

    /// Get account balances
    pub async fn get_accounts(&self) -> RestResult<Vec<Account>> {
        self.account()?.get_accounts().await
    }

    /// Get order availability for a market
    pub async fn get_order_chance(&self, market: &Market) -> RestResult<OrderChance> {
        self.account()?.get_order_chance(market).await
    }
}

impl std::fmt::Debug for UpbitRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpbitRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, without trailing path
    pub base_url: String,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Read credentials from a JSON key file
    pub fn load_credentials(self, path: impl AsRef<Path>) -> RestResult<Self> {
        let credentials = Credentials::from_file(path)?;
        Ok(self.with_credentials(credentials))
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = UpbitRestClient::new().unwrap();
        assert!(!client.has_credentials());
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:8080/")
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));

        let client = UpbitRestClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new().with_base_url("not a url");
        assert!(matches!(
            UpbitRestClient::with_config(config),
            Err(RestError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_auth_required_error() {
        let client = UpbitRestClient::new().unwrap();
        let result = client.account();
        assert!(matches!(result, Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_missing_key_file() {
        let result = UpbitRestClient::from_key_file("/nonexistent/keys.json");
        assert!(matches!(result, Err(RestError::Auth(_))));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("access", "very-secret").unwrap();
        let client = UpbitRestClient::with_credentials(creds).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("very-secret"));
    }
}
