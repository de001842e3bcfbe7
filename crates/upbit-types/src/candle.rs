//! Candle (OHLCV) data

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Market;

/// Maximum candles the exchange returns for one request
pub const MAX_CANDLE_COUNT: u16 = 200;

/// One candle exactly as the exchange sent it, keys in wire order
pub type CandleRecord = Map<String, Value>;

/// Daily candle
///
/// Typed view of a [`CandleRecord`] from `/v1/candles/days`. Prices are in
/// the market's quote currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCandle {
    pub market: Market,
    /// Candle start (UTC)
    pub candle_date_time_utc: NaiveDateTime,
    /// Candle start (KST)
    pub candle_date_time_kst: NaiveDateTime,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    /// Close price (last trade of the day)
    pub trade_price: Decimal,
    /// Last tick timestamp in milliseconds
    pub timestamp: i64,
    /// Accumulated traded value
    pub candle_acc_trade_price: Decimal,
    /// Accumulated traded volume
    pub candle_acc_trade_volume: Decimal,
    pub prev_closing_price: Decimal,
    pub change_price: Decimal,
    pub change_rate: Decimal,
    /// Close price converted to another quote, only when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_trade_price: Option<Decimal>,
}

impl DayCandle {
    /// Build a typed candle from a raw record
    pub fn from_record(record: &CandleRecord) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(record.clone()))
    }

    /// Daily range (high - low)
    pub fn range(&self) -> Decimal {
        self.high_price - self.low_price
    }

    /// True if the candle closed at or above its open
    pub fn is_bullish(&self) -> bool {
        self.trade_price >= self.opening_price
    }
}

impl TryFrom<&CandleRecord> for DayCandle {
    type Error = serde_json::Error;

    fn try_from(record: &CandleRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "market": "KRW-BTC",
        "candle_date_time_utc": "2024-03-01T00:00:00",
        "candle_date_time_kst": "2024-03-01T09:00:00",
        "opening_price": 85000000,
        "high_price": 87500000,
        "low_price": 84200000,
        "trade_price": 86900000,
        "timestamp": 1709337599876,
        "candle_acc_trade_price": 412345678901.5,
        "candle_acc_trade_volume": 4781.25,
        "prev_closing_price": 85000000,
        "change_price": 1900000,
        "change_rate": 0.0223529412
    }"#;

    fn sample_record() -> CandleRecord {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_day_candle_from_record() {
        let candle = DayCandle::from_record(&sample_record()).unwrap();
        assert_eq!(candle.market.as_str(), "KRW-BTC");
        assert_eq!(candle.opening_price, dec!(85000000));
        assert_eq!(candle.trade_price, dec!(86900000));
        assert_eq!(candle.candle_acc_trade_volume, dec!(4781.25));
        assert_eq!(candle.change_rate, dec!(0.0223529412));
        assert_eq!(candle.timestamp, 1_709_337_599_876);
        assert_eq!(
            candle.candle_date_time_kst.to_string(),
            "2024-03-01 09:00:00"
        );
        assert!(candle.converted_trade_price.is_none());
    }

    #[test]
    fn test_day_candle_helpers() {
        let candle = DayCandle::try_from(&sample_record()).unwrap();
        assert_eq!(candle.range(), dec!(3300000));
        assert!(candle.is_bullish());
    }

    #[test]
    fn test_record_keeps_wire_order() {
        let record = sample_record();
        let keys: Vec<&str> = record.keys().map(String::as_str).take(3).collect();
        assert_eq!(keys, ["market", "candle_date_time_utc", "candle_date_time_kst"]);
    }

    #[test]
    fn test_missing_field_is_error() {
        let mut record = sample_record();
        record.remove("trade_price");
        assert!(DayCandle::from_record(&record).is_err());
    }
}
