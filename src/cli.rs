//! CLI definition and pipeline orchestration.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::adapters::coingecko_adapter::CoinGeckoAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::backtest::{merge_trade_logs, pair_trades, Summary};
use crate::domain::enrich::enrich;
use crate::domain::error::GeckotraderError;
use crate::domain::signal::StrategyId;
use crate::domain::strategy::generate_signals;
use crate::domain::trade::Trade;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

pub const DEFAULT_SYMBOL: &str = "bitcoin";
pub const DEFAULT_DAYS: u32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "geckotrader",
    about = "Momentum strategy backtester for CoinGecko OHLC data"
)]
pub struct Cli {
    /// CoinGecko coin id to backtest
    #[arg(long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// Lookback window in days
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    pub days: u32,
}

pub fn run(cli: Cli) -> ExitCode {
    let data_port = CoinGeckoAdapter::new();
    match run_pipeline(&data_port, &cli.symbol, cli.days, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Staged pipeline: fetch, enrich, scan both strategies, then pair, merge,
/// summarize and report.
///
/// Empty-data checkpoints report a diagnostic and return `Ok`; the only
/// error path is a fault while writing the report.
pub fn run_pipeline(
    data_port: &dyn DataPort,
    symbol: &str,
    days: u32,
    out: &mut dyn Write,
) -> Result<(), GeckotraderError> {
    eprintln!("Fetching {days}-day OHLC history for {symbol}...");
    let bars = data_port.fetch_ohlc(symbol, days);
    writeln!(out, "Fetched {} bars", bars.len())?;

    if bars.is_empty() {
        writeln!(out, "No market data available; nothing to backtest.")?;
        return Ok(());
    }

    let enriched = enrich(&bars);
    writeln!(out, "{} bars after indicator warmup", enriched.len())?;

    if enriched.is_empty() {
        writeln!(out, "No bars survived indicator warmup; nothing to backtest.")?;
        return Ok(());
    }

    let logs: Vec<Vec<Trade>> = StrategyId::ALL
        .iter()
        .map(|&strategy| pair_trades(&generate_signals(&enriched, strategy)))
        .collect();

    let trades = merge_trade_logs(logs);
    let summary = Summary::compute(&trades);

    TextReportAdapter::new().write(&trades, &summary, out)
}
