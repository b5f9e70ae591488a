//! Price series provider boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::price::PriceSeries;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered but had nothing usable for the symbol.
    #[error("no price data for '{symbol}': {reason}")]
    NoData { symbol: String, reason: String },

    /// Transport-level failure; eligible for provider-side retry.
    #[error("price data request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider's payload did not have the expected shape.
    #[error("malformed provider response: {0}")]
    Decode(String),
}

/// Source of daily OHLC history for one instrument.
///
/// Implementations own all blocking, caching, and retry; the signal engine
/// only ever sees a fully materialized series.
#[async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    async fn fetch(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<PriceSeries, ProviderError>;
}
