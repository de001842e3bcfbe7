//! Moving averages of daily closes and the crossover buy signal

use rust_decimal::Decimal;

use crate::candle::DayCandle;

/// Windows (in days) used when the caller has no preference
pub const DEFAULT_WINDOWS: [usize; 5] = [5, 20, 60, 120, 240];

/// Days the short average must lead the long one
pub const DEFAULT_CROSS_DURATION: usize = 3;

/// Rolling mean of closing prices over one window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovingAverage {
    /// Window length in days
    pub window: usize,
    /// One entry per candle, oldest first; `None` until the window fills
    pub values: Vec<Option<Decimal>>,
}

impl MovingAverage {
    /// Most recent value, if the window has filled
    pub fn latest(&self) -> Option<Decimal> {
        self.values.last().copied().flatten()
    }
}

/// Closing prices ordered oldest first
///
/// The exchange returns candles newest first; this sorts by UTC candle time
/// regardless of input order.
pub fn closes_oldest_first(candles: &[DayCandle]) -> Vec<Decimal> {
    let mut sorted: Vec<&DayCandle> = candles.iter().collect();
    sorted.sort_by_key(|c| c.candle_date_time_utc);
    sorted.iter().map(|c| c.trade_price).collect()
}

/// Simple moving average over `prices`
///
/// Entry `i` averages `prices[i + 1 - window..=i]`. A zero window yields no
/// values.
pub fn moving_average(prices: &[Decimal], window: usize) -> Vec<Option<Decimal>> {
    if window == 0 {
        return vec![None; prices.len()];
    }

    let divisor = Decimal::from(window);
    let mut sum = Decimal::ZERO;

    prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            sum += *price;
            if i >= window {
                sum -= prices[i - window];
            }
            (i + 1 >= window).then(|| sum / divisor)
        })
        .collect()
}

/// Moving averages of the candles' closes for each window
///
/// Windows that are zero or longer than the series are skipped, so the
/// result can be shorter than `windows`.
pub fn moving_averages(candles: &[DayCandle], windows: &[usize]) -> Vec<MovingAverage> {
    let closes = closes_oldest_first(candles);

    windows
        .iter()
        .filter(|&&window| window > 0 && window <= closes.len())
        .map(|&window| MovingAverage {
            window,
            values: moving_average(&closes, window),
        })
        .collect()
}

/// Buy signal at the end of the series
///
/// See [`predict_cross_at`]; too little history predicts no buy.
pub fn predict_cross(
    short: &[Option<Decimal>],
    long: &[Option<Decimal>],
    cross_duration: usize,
) -> bool {
    let end = short.len().min(long.len());
    predict_cross_at(short, long, end, cross_duration).unwrap_or(false)
}

/// Buy signal over the `cross_duration` entries ending before `end`
///
/// True when the short average is above the long one on more of those days
/// than not. A tie, or a day where either average is missing, counts
/// against buying. Returns `None` when fewer than `cross_duration` entries
/// precede `end`.
pub fn predict_cross_at(
    short: &[Option<Decimal>],
    long: &[Option<Decimal>],
    end: usize,
    cross_duration: usize,
) -> Option<bool> {
    if cross_duration == 0 || end > short.len() || end > long.len() || end < cross_duration {
        return None;
    }

    let start = end - cross_duration;
    let above = short[start..end]
        .iter()
        .zip(&long[start..end])
        .filter(|(s, l)| matches!((s, l), (Some(s), Some(l)) if s > l))
        .count();

    Some(above * 2 > cross_duration)
}
