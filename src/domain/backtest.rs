//! Trade pairing and aggregation.

use crate::domain::strategy::SignalStream;
use crate::domain::trade::{Outcome, Trade};

/// Pair a strategy's entry and exit signals into trades by sequence position:
/// the k-th entry matches the k-th exit. Surplus signals beyond the shorter
/// sequence are discarded, so an unterminated trailing position produces no
/// trade. Relies on the strategy-scan alternation invariant; the debug
/// assertion catches a variant that ever breaks it.
pub fn pair_trades(stream: &SignalStream) -> Vec<Trade> {
    let paired = stream.entries.len().min(stream.exits.len());
    let mut trades = Vec::with_capacity(paired);

    for (entry, exit) in stream.entries.iter().zip(stream.exits.iter()) {
        debug_assert!(
            entry.timestamp < exit.timestamp,
            "exit at {} does not follow its entry at {}",
            exit.timestamp,
            entry.timestamp
        );

        let pnl = exit.price - entry.price;
        trades.push(Trade {
            entry_timestamp: entry.timestamp,
            entry_price: entry.price,
            exit_timestamp: exit.timestamp,
            exit_price: exit.price,
            strategy: stream.strategy,
            pnl,
            outcome: Outcome::from_pnl(pnl),
        });
    }

    trades
}

/// Concatenate per-strategy trade logs and stable-sort ascending by entry
/// timestamp. Ties keep the per-strategy order of the input logs.
pub fn merge_trade_logs(logs: Vec<Vec<Trade>>) -> Vec<Trade> {
    let mut merged: Vec<Trade> = logs.into_iter().flatten().collect();
    merged.sort_by_key(|t| t.entry_timestamp);
    merged
}

/// Aggregate statistics over a merged trade log.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub net_pnl: f64,
}

impl Summary {
    /// One scan: counts by outcome plus the arithmetic sum of per-trade PnL.
    pub fn compute(trades: &[Trade]) -> Self {
        let mut winning_trades = 0usize;
        let mut losing_trades = 0usize;
        let mut net_pnl = 0.0_f64;

        for trade in trades {
            match trade.outcome {
                Outcome::Win => winning_trades += 1,
                Outcome::Loss => losing_trades += 1,
            }
            net_pnl += trade.pnl;
        }

        Summary {
            total_trades: trades.len(),
            winning_trades,
            losing_trades,
            net_pnl,
        }
    }
}
