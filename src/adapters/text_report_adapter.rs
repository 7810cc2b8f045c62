//! Plain-text report adapter implementing ReportPort.
//!
//! Renders the aggregated trade table and summary block to any writer,
//! typically stdout.

use crate::domain::backtest::Summary;
use crate::domain::error::GeckotraderError;
use crate::domain::trade::Trade;
use crate::ports::report_port::ReportPort;
use std::io::Write;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        trades: &[Trade],
        summary: &Summary,
        out: &mut dyn Write,
    ) -> Result<(), GeckotraderError> {
        writeln!(out)?;
        writeln!(out, "Backtest results")?;

        if trades.is_empty() {
            writeln!(out, "  (no trades)")?;
        } else {
            writeln!(
                out,
                "{:<17} {:>12}  {:<17} {:>12}  {:<20} {:>12}  {}",
                "Entry Time", "Entry Price", "Exit Time", "Exit Price", "Strategy", "PnL", "Outcome"
            )?;
            for trade in trades {
                writeln!(
                    out,
                    "{:<17} {:>12.4}  {:<17} {:>12.4}  {:<20} {:>12.4}  {}",
                    trade.entry_timestamp.format(TIME_FORMAT).to_string(),
                    trade.entry_price,
                    trade.exit_timestamp.format(TIME_FORMAT).to_string(),
                    trade.exit_price,
                    trade.strategy.to_string(),
                    trade.pnl,
                    trade.outcome,
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Summary:")?;
        writeln!(out, "  Total trades:   {}", summary.total_trades)?;
        writeln!(out, "  Winning trades: {}", summary.winning_trades)?;
        writeln!(out, "  Losing trades:  {}", summary.losing_trades)?;
        writeln!(out, "  Net PnL:        {:.4}", summary.net_pnl)?;

        Ok(())
    }
}
