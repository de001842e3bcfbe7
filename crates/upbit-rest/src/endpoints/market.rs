//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, instrument};
use upbit_types::{CandleRecord, DayCandle, Market, MAX_CANDLE_COUNT};

use crate::error::{RestError, RestResult};
use crate::types::RawResponse;

const DAY_CANDLES_PATH: &str = "/v1/candles/days";

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Get daily candles, newest first, exactly as the exchange sent them
    ///
    /// # Errors
    /// - `InvalidParameter` if the market code is malformed or `count` is
    ///   outside `1..=200` (nothing is sent)
    /// - `Http` on transport failure
    /// - `Status` on a non-success response (body is not parsed)
    /// - `Parse` if the body is not a JSON array of objects
    #[instrument(skip(self))]
    pub async fn get_day_candles(&self, query: &CandleQuery) -> RestResult<Vec<CandleRecord>> {
        query.validate()?;

        let url = format!("{}{}", self.base_url, DAY_CANDLES_PATH);
        debug!("Fetching {} day candles for {}", query.count, query.market);

        let response = self
            .client
            .get(&url)
            .query(&query.to_params())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let candles: Vec<CandleRecord> = RawResponse::read(response).await?.into_json()?;
        debug!("Received {} candles", candles.len());

        Ok(candles)
    }

    /// Get every daily candle in a date range, newest first
    ///
    /// Issues one request per [`CandleRange::batches`] entry, one after
    /// another, and stops early once the exchange has nothing older.
    #[instrument(skip(self))]
    pub async fn get_day_candles_range(&self, range: &CandleRange) -> RestResult<Vec<CandleRecord>> {
        let mut records = Vec::new();

        for query in range.batches() {
            let mut batch = self.get_day_candles(&query).await?;
            let exhausted = batch.len() < usize::from(query.count);
            records.append(&mut batch);

            if exhausted {
                debug!("No candles before {:?}", query.to);
                break;
            }
        }

        Ok(records)
    }

    /// Get daily candles as typed values
    #[instrument(skip(self))]
    pub async fn get_day_candles_typed(&self, query: &CandleQuery) -> RestResult<Vec<DayCandle>> {
        self.get_day_candles(query)
            .await?
            .iter()
            .map(|record| DayCandle::from_record(record).map_err(|e| RestError::Parse(e.to_string())))
            .collect()
    }
}

/// Query for `/v1/candles/days`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleQuery {
    pub market: Market,
    /// Last candle time (exclusive); `None` means most recent
    pub to: Option<DateTime<Utc>>,
    /// Number of candles, at most 200
    pub count: u16,
}

impl CandleQuery {
    pub fn new(market: impl Into<Market>) -> Self {
        Self {
            market: market.into(),
            to: None,
            count: MAX_CANDLE_COUNT,
        }
    }

    pub fn with_to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    pub fn with_count(mut self, count: u16) -> Self {
        self.count = count;
        self
    }

    /// Reject markets and counts the exchange would refuse
    pub fn validate(&self) -> RestResult<()> {
        self.market
            .validate()
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        if self.count == 0 || self.count > MAX_CANDLE_COUNT {
            return Err(RestError::InvalidParameter(format!(
                "count must be between 1 and {}, got {}",
                MAX_CANDLE_COUNT, self.count
            )));
        }
        Ok(())
    }

    /// Query parameters in wire order; `to` is sent empty when unset
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let to = self
            .to
            .map(|to| to.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default();

        vec![
            ("market", self.market.to_string()),
            ("to", to),
            ("count", self.count.to_string()),
        ]
    }
}

impl Default for CandleQuery {
    fn default() -> Self {
        Self::new(Market::default())
    }
}

/// Span of daily candles, `start` inclusive and `end` exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleRange {
    pub market: Market,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CandleRange {
    pub fn new(market: impl Into<Market>, start: DateTime<Utc>, end: DateTime<Utc>) -> RestResult<Self> {
        if start >= end {
            return Err(RestError::InvalidParameter(format!(
                "range start {} is not before end {}",
                start, end
            )));
        }

        Ok(Self {
            market: market.into(),
            start,
            end,
        })
    }

    /// Number of daily candles the range covers, counting a partial day
    pub fn days(&self) -> i64 {
        let seconds = (self.end - self.start).num_seconds();
        (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    }

    /// Queries covering the range, newest first
    ///
    /// Each query ends where the previous one started and asks for at most
    /// [`MAX_CANDLE_COUNT`] candles.
    pub fn batches(&self) -> CandleBatches {
        CandleBatches {
            market: self.market.clone(),
            remaining: self.days(),
            cursor: self.end,
        }
    }
}

const SECONDS_PER_DAY: i64 = 86_400;

/// Iterator returned by [`CandleRange::batches`]
#[derive(Debug, Clone)]
pub struct CandleBatches {
    market: Market,
    remaining: i64,
    cursor: DateTime<Utc>,
}

impl Iterator for CandleBatches {
    type Item = CandleQuery;

    fn next(&mut self) -> Option<CandleQuery> {
        if self.remaining <= 0 {
            return None;
        }

        let count = self.remaining.min(i64::from(MAX_CANDLE_COUNT));
        let query = CandleQuery::new(self.market.clone())
            .with_to(self.cursor)
            .with_count(count as u16);

        self.remaining -= count;
        self.cursor -= Duration::days(count);
        Some(query)
    }
}
