//! OHLC bar representations.

use chrono::{DateTime, Utc};

/// A raw bar as supplied by the market data feed. Timestamps are unique and
/// strictly increasing within a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// The CoinGecko OHLC endpoint carries no volume; other feeds may.
    pub volume: Option<f64>,
}

/// A bar that survived the indicator warmup filter. Every indicator field is
/// populated; bars with incomplete history never become `EnrichedBar`s.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
    pub ema_short: f64,
    pub ema_long: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    pub trend_ema: f64,
    pub rsi: f64,
}
