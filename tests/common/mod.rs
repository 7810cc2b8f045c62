#![allow(dead_code)]

use chrono::{DateTime, Utc};
use geckotrader::domain::bar::{Bar, EnrichedBar};
use geckotrader::ports::data_port::DataPort;
use std::collections::HashMap;

pub fn ts(minute: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000 + minute * 60_000).unwrap()
}

pub fn make_bar(minute: i64, close: f64) -> Bar {
    Bar {
        timestamp: ts(minute),
        open: close,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: None,
    }
}

/// A smooth oscillating price path; long enough inputs clear the 33-bar
/// MACD(12,26,9) warmup with room for several swings.
pub fn oscillating_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.35).sin() * 10.0)
        .collect()
}

/// An enriched bar with scripted indicator fields; the remaining OHLC fields
/// are derived from `close`.
pub fn make_enriched(
    minute: i64,
    close: f64,
    macd_line: f64,
    macd_signal: f64,
    rsi: f64,
    trend_ema: f64,
) -> EnrichedBar {
    EnrichedBar {
        timestamp: ts(minute),
        open: close,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: None,
        ema_short: close,
        ema_long: close,
        macd_line,
        macd_signal,
        trend_ema,
        rsi,
    }
}

/// In-memory DataPort: canned bars per symbol, empty for unknown symbols
/// (the same degradation shape as the real feed).
pub struct MockDataPort {
    bars: HashMap<String, Vec<Bar>>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            bars: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<Bar>) -> Self {
        self.bars.insert(symbol.to_string(), bars);
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_ohlc(&self, symbol: &str, _days: u32) -> Vec<Bar> {
        self.bars.get(symbol).cloned().unwrap_or_default()
    }
}
