//! Domain error types.

/// Top-level error type for geckotrader.
///
/// Fetch and parse failures are recovered at the data feed boundary (the feed
/// degrades to an empty bar sequence); they never cross into the domain
/// pipeline. `Io` can surface from report writing.
#[derive(Debug, thiserror::Error)]
pub enum GeckotraderError {
    #[error("fetch failed for {symbol}: {reason}")]
    Fetch { symbol: String, reason: String },

    #[error("malformed market data response: {reason}")]
    MalformedResponse { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
