//! Market data feed port trait.

use crate::domain::bar::Bar;

/// Supplies a time-ordered OHLC bar sequence for a symbol and a day-count
/// lookback window.
///
/// The recovery rule is part of the contract: implementations return an empty
/// sequence on any transport, HTTP-status, or parse failure; no error crosses
/// this boundary. Returned bars are sorted by timestamp with duplicates
/// removed.
pub trait DataPort {
    fn fetch_ohlc(&self, symbol: &str, days: u32) -> Vec<Bar>;
}
