//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes returned by the live Upbit API.

#![allow(dead_code)]

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use httpmock::prelude::*;
use upbit_rest::{ClientConfig, Credentials, UpbitRestClient};

pub const ACCESS_KEY: &str = "test-access-key";
pub const SECRET_KEY: &str = "test-secret-key";

/// Three day candles for KRW-BTC, newest first
pub const DAY_CANDLES: &str = r#"[
    {
        "market": "KRW-BTC",
        "candle_date_time_utc": "2024-03-03T00:00:00",
        "candle_date_time_kst": "2024-03-03T09:00:00",
        "opening_price": 87100000,
        "high_price": 88000000,
        "low_price": 86500000,
        "trade_price": 87650000,
        "timestamp": 1709510399512,
        "candle_acc_trade_price": 198765432101.25,
        "candle_acc_trade_volume": 2271.5,
        "prev_closing_price": 87100000,
        "change_price": 550000,
        "change_rate": 0.0063145809
    },
    {
        "market": "KRW-BTC",
        "candle_date_time_utc": "2024-03-02T00:00:00",
        "candle_date_time_kst": "2024-03-02T09:00:00",
        "opening_price": 86900000,
        "high_price": 87700000,
        "low_price": 86100000,
        "trade_price": 87100000,
        "timestamp": 1709423999871,
        "candle_acc_trade_price": 250123456789.75,
        "candle_acc_trade_volume": 2875.125,
        "prev_closing_price": 86900000,
        "change_price": 200000,
        "change_rate": 0.0023014959
    },
    {
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
    }
]"#;

pub const ACCOUNTS: &str = r#"[{"currency":"KRW","balance":"1500000.0","locked":"0.0","avg_buy_price":"0","avg_buy_price_modified":false,"unit_currency":"KRW"},{"currency":"BTC","balance":"0.25","locked":"0.05","avg_buy_price":"80000000","avg_buy_price_modified":false,"unit_currency":"KRW"}]"#;

pub const ORDER_CHANCE: &str = r#"{
    "bid_fee": "0.0005",
    "ask_fee": "0.0005",
    "maker_bid_fee": "0.0005",
    "maker_ask_fee": "0.0005",
    "market": {
        "id": "KRW-BTC",
        "name": "BTC/KRW",
        "order_types": [],
        "order_sides": ["ask", "bid"],
        "bid": {"currency": "KRW", "price_unit": null, "min_total": "5000"},
        "ask": {"currency": "BTC", "price_unit": null, "min_total": "5000"},
        "max_total": "1000000000.0",
        "state": "active"
    },
    "bid_account": {"currency":"KRW","balance":"1500000.0","locked":"0.0","avg_buy_price":"0","avg_buy_price_modified":false,"unit_currency":"KRW"},
    "ask_account": {"currency":"BTC","balance":"0.25","locked":"0.05","avg_buy_price":"80000000","avg_buy_price_modified":false,"unit_currency":"KRW"}
}"#;

pub const INVALID_ACCESS_KEY: &str =
    r#"{"error":{"name":"invalid_access_key","message":"잘못된 엑세스 키입니다."}}"#;

pub const TOO_MANY_REQUESTS: &str = "Too many API requests.";

/// Matches any compact JWT bearer value
pub const BEARER_PATTERN: &str = r"^Bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$";

pub fn test_credentials() -> Credentials {
    Credentials::new(ACCESS_KEY, SECRET_KEY).unwrap()
}

/// Client without credentials pointed at the mock server
pub fn public_client(server: &MockServer) -> UpbitRestClient {
    UpbitRestClient::with_config(ClientConfig::new().with_base_url(server.base_url())).unwrap()
}

/// Client with test credentials pointed at the mock server
pub fn private_client(server: &MockServer) -> UpbitRestClient {
    let config = ClientConfig::new()
        .with_base_url(server.base_url())
        .with_credentials(test_credentials());
    UpbitRestClient::with_config(config).unwrap()
}

/// Write a key file into the temp dir and return its path
pub fn write_key_file(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("upbit-keys-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Authorization header value of a recorded request
pub fn authorization(req: &HttpMockRequest) -> Option<String> {
    req.headers_vec()
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        .map(|(_, value)| value.clone())
}

/// JSON array of `count` minimal candle objects
pub fn range_batch(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"market":"KRW-BTC","timestamp":{}}}"#, i))
        .collect();
    format!("[{}]", records.join(","))
}

/// Log sink shared with a `tracing_subscriber` fmt layer
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a subscriber writing into this sink for the current thread
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
