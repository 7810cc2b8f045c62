//! RSI + trend-EMA momentum strategy.
//!
//! Entry is edge-triggered and requires both momentum and trend confirmation:
//! RSI above 30 AND close above the trend EMA, where the previous bar failed
//! at least one of the two. Exit is deliberately asymmetric: it fires on the
//! first breach of either condition (RSI below 70 OR close below the trend
//! EMA), with no edge requirement.

use crate::domain::bar::EnrichedBar;
use crate::domain::signal::Side;
use crate::domain::strategy::PositionState;

pub const RSI_ENTRY_FLOOR: f64 = 30.0;
pub const RSI_EXIT_CEILING: f64 = 70.0;

fn entry_conditions_hold(bar: &EnrichedBar) -> bool {
    bar.rsi > RSI_ENTRY_FLOOR && bar.close > bar.trend_ema
}

pub fn transition(
    state: PositionState,
    prev: &EnrichedBar,
    current: &EnrichedBar,
) -> (PositionState, Option<Side>) {
    match state {
        PositionState::Flat => {
            if entry_conditions_hold(current) && !entry_conditions_hold(prev) {
                (PositionState::Long, Some(Side::Entry))
            } else {
                (PositionState::Flat, None)
            }
        }
        PositionState::Long => {
            if current.rsi < RSI_EXIT_CEILING || current.close < current.trend_ema {
                (PositionState::Flat, Some(Side::Exit))
            } else {
                (PositionState::Long, None)
            }
        }
    }
}
