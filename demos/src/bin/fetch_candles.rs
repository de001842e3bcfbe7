//! Daily candle fetcher
//!
//! Fetches the latest 200 daily candles for KRW-BTC, summarizes them and
//! prints the 5/20-day moving-average crossover signal.
//! Logs go to stderr; set `RUST_LOG=debug` to see the request.
//!
//! Run: cargo run --bin fetch_candles

use colored::*;
use tracing::info;
use tracing_subscriber::EnvFilter;
use upbit_rest::{CandleQuery, DayCandle, UpbitRestClient};
use upbit_types::{moving_averages, predict_cross, Market, DEFAULT_CROSS_DURATION, MAX_CANDLE_COUNT};

const ROWS_SHOWN: usize = 10;
const SHORT_WINDOW: usize = 5;
const LONG_WINDOW: usize = 20;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let client = UpbitRestClient::new()?;
    let query = CandleQuery::new(Market::KRW_BTC).with_count(MAX_CANDLE_COUNT);

    let records = client.get_day_candles(&query).await?;
    info!("Parsed {} candle records", records.len());

    let candles = records
        .iter()
        .map(DayCandle::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    println!(
        "  {:<12} {:>14} {:>14} {:>14} {:>14} {:>10}",
        "DATE (KST)".white().bold(),
        "OPEN".white().bold(),
        "HIGH".white().bold(),
        "LOW".white().bold(),
        "CLOSE".white().bold(),
        "CHANGE".white().bold()
    );
    println!("  {}", "─".repeat(83));

    for candle in candles.iter().take(ROWS_SHOWN) {
        let change = format!("{:+.2}%", candle.change_rate * upbit_types::Decimal::ONE_HUNDRED);
        let change = if candle.is_bullish() {
            change.green()
        } else {
            change.red()
        };

        println!(
            "  {:<12} {:>14} {:>14} {:>14} {:>14} {:>10}",
            candle.candle_date_time_kst.date().to_string().cyan(),
            candle.opening_price,
            candle.high_price,
            candle.low_price,
            candle.trade_price,
            change
        );
    }

    if candles.len() > ROWS_SHOWN {
        println!("  ... {} more", candles.len() - ROWS_SHOWN);
    }

    if let [short, long] = moving_averages(&candles, &[SHORT_WINDOW, LONG_WINDOW]).as_slice() {
        let buy = predict_cross(&short.values, &long.values, DEFAULT_CROSS_DURATION);
        let signal = if buy { "BUY".green().bold() } else { "HOLD".yellow().bold() };

        println!();
        println!(
            "  MA{}: {}  MA{}: {}  signal: {}",
            short.window,
            short.latest().map(|v| v.round_dp(0).to_string()).unwrap_or_default(),
            long.window,
            long.latest().map(|v| v.round_dp(0).to_string()).unwrap_or_default(),
            signal
        );
    }

    Ok(())
}
