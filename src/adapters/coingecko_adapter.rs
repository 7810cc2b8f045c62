//! CoinGecko market data adapter.
//!
//! Fetches OHLC candles from the public `/coins/{id}/ohlc` endpoint. The
//! payload is a JSON array of `[timestamp_ms, open, high, low, close]` rows
//! with no volume column. Any transport, HTTP-status, or parse failure is
//! recovered here: one diagnostic line on stderr, empty result. No retries.

use crate::domain::bar::Bar;
use crate::domain::error::GeckotraderError;
use crate::ports::data_port::DataPort;
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One `[timestamp_ms, open, high, low, close]` row of the OHLC payload.
#[derive(Debug, Deserialize)]
struct OhlcRow(i64, f64, f64, f64, f64);

pub struct CoinGeckoAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CoinGeckoAdapter {
    pub fn new() -> Self {
        Self::with_base_url(COINGECKO_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn ohlc_url(&self, symbol: &str, days: u32) -> String {
        format!(
            "{}/coins/{}/ohlc?vs_currency=usd&days={}",
            self.base_url, symbol, days
        )
    }

    fn try_fetch(&self, symbol: &str, days: u32) -> Result<Vec<Bar>, GeckotraderError> {
        let url = self.ohlc_url(symbol, days);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| GeckotraderError::Fetch {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeckotraderError::Fetch {
                symbol: symbol.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let rows: Vec<OhlcRow> = resp.json().map_err(|e| GeckotraderError::MalformedResponse {
            reason: e.to_string(),
        })?;

        rows_to_bars(rows)
    }
}

impl DataPort for CoinGeckoAdapter {
    fn fetch_ohlc(&self, symbol: &str, days: u32) -> Vec<Bar> {
        match self.try_fetch(symbol, days) {
            Ok(bars) => bars,
            Err(e) => {
                eprintln!("error fetching data from CoinGecko: {e}");
                Vec::new()
            }
        }
    }
}

impl Default for CoinGeckoAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert raw payload rows into bars sorted by timestamp, dropping
/// duplicate-timestamp rows (keeping the first) so the strictly-increasing
/// bar invariant holds even against a misbehaving upstream.
fn rows_to_bars(rows: Vec<OhlcRow>) -> Result<Vec<Bar>, GeckotraderError> {
    let mut bars = Vec::with_capacity(rows.len());

    for OhlcRow(ts, open, high, low, close) in rows {
        let timestamp = DateTime::from_timestamp_millis(ts).ok_or_else(|| {
            GeckotraderError::MalformedResponse {
                reason: format!("invalid timestamp: {ts}"),
            }
        })?;

        bars.push(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume: None,
        });
    }

    bars.sort_by_key(|b| b.timestamp);
    bars.dedup_by_key(|b| b.timestamp);

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rows(json: &str) -> Vec<OhlcRow> {
        serde_json::from_str(json).expect("fixture must parse")
    }

    #[test]
    fn rows_to_bars_basic() {
        let rows = parse_rows(
            r#"[
                [1700000000000, 100.0, 110.0, 95.0, 105.0],
                [1700001800000, 105.0, 112.0, 104.0, 111.0]
            ]"#,
        );

        let bars = rows_to_bars(rows).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].timestamp.timestamp_millis(), 1_700_000_000_000);
        assert!((bars[0].open - 100.0).abs() < f64::EPSILON);
        assert!((bars[0].high - 110.0).abs() < f64::EPSILON);
        assert!((bars[0].low - 95.0).abs() < f64::EPSILON);
        assert!((bars[0].close - 105.0).abs() < f64::EPSILON);
        assert!(bars[0].volume.is_none());
    }

    #[test]
    fn rows_to_bars_sorts_by_timestamp() {
        let rows = parse_rows(
            r#"[
                [1700003600000, 3.0, 3.0, 3.0, 3.0],
                [1700000000000, 1.0, 1.0, 1.0, 1.0],
                [1700001800000, 2.0, 2.0, 2.0, 2.0]
            ]"#,
        );

        let bars = rows_to_bars(rows).unwrap();
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn rows_to_bars_drops_duplicate_timestamps() {
        let rows = parse_rows(
            r#"[
                [1700000000000, 1.0, 1.0, 1.0, 1.0],
                [1700000000000, 9.0, 9.0, 9.0, 9.0],
                [1700001800000, 2.0, 2.0, 2.0, 2.0]
            ]"#,
        );

        let bars = rows_to_bars(rows).unwrap();
        assert_eq!(bars.len(), 2);
        // First row with the duplicated timestamp wins.
        assert!((bars[0].close - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rows_to_bars_rejects_out_of_range_timestamp() {
        let rows = vec![OhlcRow(i64::MAX, 1.0, 1.0, 1.0, 1.0)];
        let err = rows_to_bars(rows).unwrap_err();
        assert!(matches!(err, GeckotraderError::MalformedResponse { .. }));
    }

    #[test]
    fn rows_to_bars_empty_payload() {
        let bars = rows_to_bars(parse_rows("[]")).unwrap();
        assert!(bars.is_empty());
    }

    #[test]
    fn ohlc_url_shape() {
        let adapter = CoinGeckoAdapter::with_base_url("http://localhost:9");
        assert_eq!(
            adapter.ohlc_url("bitcoin", 1),
            "http://localhost:9/coins/bitcoin/ohlc?vs_currency=usd&days=1"
        );
    }

    #[test]
    fn fetch_failure_degrades_to_empty() {
        // Nothing listens on port 9; the connection error must be swallowed.
        let adapter = CoinGeckoAdapter::with_base_url("http://127.0.0.1:9");
        let bars = adapter.fetch_ohlc("bitcoin", 1);
        assert!(bars.is_empty());
    }
}
