//! Memoizing wrapper around a price series provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::metrics::Metrics;
use crate::models::price::PriceSeries;
use crate::services::market_data::{PriceSeriesProvider, ProviderError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    symbol: String,
    range: String,
    interval: String,
    as_of: NaiveDate,
}

/// Caches provider responses for the current UTC day, so repeated
/// evaluations of the same instrument reuse one fetch. The key includes the
/// as-of date; entries from previous days are evicted on insert.
pub struct CachedPriceProvider<P> {
    inner: P,
    cache: RwLock<HashMap<CacheKey, PriceSeries>>,
    metrics: Option<Arc<Metrics>>,
}

impl<P> CachedPriceProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

#[async_trait]
impl<P: PriceSeriesProvider> PriceSeriesProvider for CachedPriceProvider<P> {
    async fn fetch(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<PriceSeries, ProviderError> {
        let key = CacheKey {
            symbol: symbol.to_string(),
            range: range.to_string(),
            interval: interval.to_string(),
            as_of: Utc::now().date_naive(),
        };

        if let Some(series) = self.cache.read().await.get(&key) {
            debug!(symbol, "price history served from cache");
            if let Some(metrics) = &self.metrics {
                metrics.provider_cache_hits_total.inc();
            }
            return Ok(series.clone());
        }

        let series = self.inner.fetch(symbol, range, interval).await?;
        if let Some(metrics) = &self.metrics {
            metrics.provider_fetches_total.inc();
        }

        let mut cache = self.cache.write().await;
        cache.retain(|k, _| k.as_of == key.as_of);
        cache.insert(key, series.clone());
        Ok(series)
    }
}
