//! Indicator-engine boundary: joins indicator series onto raw bars.
//!
//! Bars lacking full trailing history for any requested indicator are dropped
//! here, once. Everything downstream receives `EnrichedBar`s with every
//! indicator field populated.

use crate::domain::bar::{Bar, EnrichedBar};
use crate::domain::indicator::macd::calculate_macd_default;
use crate::domain::indicator::rsi::DEFAULT_RSI_PERIOD;
use crate::domain::indicator::{calculate_ema, calculate_rsi, IndicatorValue};

pub const SHORT_EMA_PERIOD: usize = 12;
pub const LONG_EMA_PERIOD: usize = 26;
pub const TREND_EMA_PERIOD: usize = 21;

/// Compute EMA(12), EMA(26), MACD(12,26,9), trend EMA(21) and RSI(14) over
/// `bars` and keep exactly the rows where every series is valid.
pub fn enrich(bars: &[Bar]) -> Vec<EnrichedBar> {
    let ema_short = calculate_ema(bars, SHORT_EMA_PERIOD);
    let ema_long = calculate_ema(bars, LONG_EMA_PERIOD);
    let macd = calculate_macd_default(bars);
    let trend = calculate_ema(bars, TREND_EMA_PERIOD);
    let rsi = calculate_rsi(bars, DEFAULT_RSI_PERIOD);

    let mut enriched = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        let all_valid = ema_short.values[i].valid
            && ema_long.values[i].valid
            && macd.values[i].valid
            && trend.values[i].valid
            && rsi.values[i].valid;
        if !all_valid {
            continue;
        }

        let (macd_line, macd_signal) = match macd.values[i].value {
            IndicatorValue::Macd { line, signal, .. } => (line, signal),
            _ => continue,
        };

        enriched.push(EnrichedBar {
            timestamp: bar.timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            ema_short: ema_short.values[i].value.primary(),
            ema_long: ema_long.values[i].value.primary(),
            macd_line,
            macd_signal,
            trend_ema: trend.values[i].value.primary(),
            rsi: rsi.values[i].value.primary(),
        });
    }

    enriched
}
