//! Yahoo Finance v8 chart API provider.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use serde::Deserialize;
use tracing::debug;

use crate::models::price::{PriceBar, PriceSeries};
use crate::services::market_data::{PriceSeriesProvider, ProviderError};

pub struct YahooChartProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooChartProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<ChartResponse, ProviderError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<ChartResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
}

#[async_trait]
impl PriceSeriesProvider for YahooChartProvider {
    async fn fetch(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<PriceSeries, ProviderError> {
        let chart = (|| self.fetch_chart(symbol, range, interval))
            .retry(ExponentialBuilder::default().with_max_times(3))
            .when(|e| matches!(e, ProviderError::Transport(_)))
            .await?;

        let result = chart
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| ProviderError::NoData {
                symbol: symbol.to_string(),
                reason: "empty chart result".to_string(),
            })?;

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Decode("missing quote block".to_string()))?;

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            // Rows with any missing OHLC value are dropped entirely.
            let (Some(open), Some(high), Some(low), Some(close)) = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            ) else {
                continue;
            };
            let date = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| ProviderError::Decode(format!("bad timestamp {ts}")))?
                .date_naive();
            bars.push(PriceBar::new(date, open, high, low, close));
        }

        debug!(symbol, bars = bars.len(), "fetched price history");

        PriceSeries::from_bars(bars).map_err(|e| ProviderError::NoData {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        })
    }
}
