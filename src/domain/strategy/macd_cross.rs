//! MACD crossover strategy.
//!
//! Enter when the MACD line crosses from at-or-below to strictly above the
//! signal line between consecutive bars; exit on the opposite cross. Both
//! triggers are edge-triggered, so a line that stays above the signal emits
//! nothing after the initial cross.

use crate::domain::bar::EnrichedBar;
use crate::domain::signal::Side;
use crate::domain::strategy::PositionState;

pub fn transition(
    state: PositionState,
    prev: &EnrichedBar,
    current: &EnrichedBar,
) -> (PositionState, Option<Side>) {
    match state {
        PositionState::Flat => {
            let crossed_above = current.macd_line > current.macd_signal
                && prev.macd_line <= prev.macd_signal;
            if crossed_above {
                (PositionState::Long, Some(Side::Entry))
            } else {
                (PositionState::Flat, None)
            }
        }
        PositionState::Long => {
            let crossed_below = current.macd_line < current.macd_signal
                && prev.macd_line >= prev.macd_signal;
            if crossed_below {
                (PositionState::Flat, Some(Side::Exit))
            } else {
                (PositionState::Long, None)
            }
        }
    }
}
