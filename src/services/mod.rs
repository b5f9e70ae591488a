//! External collaborators: market data retrieval and caching.

pub mod cache;
pub mod market_data;
pub mod yahoo;

pub use cache::CachedPriceProvider;
pub use market_data::{PriceSeriesProvider, ProviderError};
pub use yahoo::YahooChartProvider;
