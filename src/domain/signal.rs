//! Strategy signals.

use chrono::{DateTime, Utc};
use std::fmt;

/// Closed set of strategy variants. Attached to every signal and trade so
/// downstream grouping is an exhaustive match, not a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyId {
    MacdCrossover,
    RsiTrendMomentum,
}

impl StrategyId {
    pub const ALL: [StrategyId; 2] = [StrategyId::MacdCrossover, StrategyId::RsiTrendMomentum];
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyId::MacdCrossover => write!(f, "MACD Crossover"),
            StrategyId::RsiTrendMomentum => write!(f, "RSI/Trend Momentum"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Entry,
    Exit,
}

/// A single entry or exit event. Immutable once emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub side: Side,
    pub strategy: StrategyId,
}
