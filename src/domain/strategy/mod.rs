//! Strategy signal generation.
//!
//! Each variant is a pure transition function
//! `(PositionState, previous bar, current bar) -> (new state, optional side)`
//! folded over consecutive bar pairs. Every scan owns its own
//! [`PositionState`], so the variants are testable in isolation and could run
//! concurrently without shared mutable state.

pub mod macd_cross;
pub mod rsi_trend;

use crate::domain::bar::EnrichedBar;
use crate::domain::signal::{Side, Signal, StrategyId};

/// Whether the strategy currently holds the (single, long-only) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionState {
    #[default]
    Flat,
    Long,
}

impl PositionState {
    pub fn in_position(self) -> bool {
        matches!(self, PositionState::Long)
    }
}

/// Ordered entry and exit signal sequences from one strategy scan.
///
/// Within a stream, entries and exits strictly alternate starting with an
/// entry: an exit is only ever emitted from `Long`, an entry only from `Flat`.
#[derive(Debug, Clone)]
pub struct SignalStream {
    pub strategy: StrategyId,
    pub entries: Vec<Signal>,
    pub exits: Vec<Signal>,
}

fn transition(
    strategy: StrategyId,
    state: PositionState,
    prev: &EnrichedBar,
    current: &EnrichedBar,
) -> (PositionState, Option<Side>) {
    match strategy {
        StrategyId::MacdCrossover => macd_cross::transition(state, prev, current),
        StrategyId::RsiTrendMomentum => rsi_trend::transition(state, prev, current),
    }
}

/// Single forward scan over `bars`. Signals are stamped with the current
/// bar's timestamp and close. Sequences of length <= 1 yield empty streams;
/// a position still open at the end of the sequence emits no final exit.
pub fn generate_signals(bars: &[EnrichedBar], strategy: StrategyId) -> SignalStream {
    let mut stream = SignalStream {
        strategy,
        entries: Vec::new(),
        exits: Vec::new(),
    };
    let mut state = PositionState::default();

    for pair in bars.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);
        let (next_state, emitted) = transition(strategy, state, prev, current);

        if let Some(side) = emitted {
            let signal = Signal {
                timestamp: current.timestamp,
                price: current.close,
                side,
                strategy,
            };
            match side {
                Side::Entry => stream.entries.push(signal),
                Side::Exit => stream.exits.push(signal),
            }
        }

        state = next_state;
    }

    stream
}
