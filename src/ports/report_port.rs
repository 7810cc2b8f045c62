//! Report generation port trait.

use crate::domain::backtest::Summary;
use crate::domain::error::GeckotraderError;
use crate::domain::trade::Trade;
use std::io::Write;

/// Port for rendering the aggregated trade log and its summary.
pub trait ReportPort {
    fn write(
        &self,
        trades: &[Trade],
        summary: &Summary,
        out: &mut dyn Write,
    ) -> Result<(), GeckotraderError>;
}
