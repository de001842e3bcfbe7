//! Private account endpoints
//!
//! These endpoints require authentication.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::{debug, instrument};
use upbit_auth::{query_string, Credentials, TokenSigner};
use upbit_types::{Account, Market, OrderChance};

use crate::error::{RestError, RestResult};
use crate::types::RawResponse;

const ACCOUNTS_PATH: &str = "/v1/accounts";
const ORDER_CHANCE_PATH: &str = "/v1/orders/chance";

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Make an authenticated GET request
    ///
    /// A fresh token is signed for every call. When `params` is non-empty the
    /// token also carries the hash of the query string.
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> RestResult<RawResponse> {
        let authorization = TokenSigner::new(self.credentials)
            .with_query(&query_string(params))
            .bearer()?;

        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let encoded = serde_urlencoded::to_string(params)
                .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }

        debug!("Making authenticated request to {}", path);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        RawResponse::read(response).await
    }

    /// Get account balances without interpreting the response
    ///
    /// The status is carried along but never checked; an authentication
    /// failure comes back as the exchange's error JSON in `body`.
    #[instrument(skip(self))]
    pub async fn get_accounts_raw(&self) -> RestResult<RawResponse> {
        self.get(ACCOUNTS_PATH, &[]).await
    }

    /// Get account balances
    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> RestResult<Vec<Account>> {
        self.get_accounts_raw().await?.into_json()
    }

    /// Get fees, balances and limits for ordering on a market
    #[instrument(skip(self))]
    pub async fn get_order_chance(&self, market: &Market) -> RestResult<OrderChance> {
        self.get(ORDER_CHANCE_PATH, &[("market", market.as_str())])
            .await?
            .into_json()
    }
}
