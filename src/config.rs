//! Runtime configuration from environment variables.

use std::env;

/// Deployment environment name, from `SYGNAL_ENV` (defaults to "sandbox").
pub fn get_environment() -> String {
    env::var("SYGNAL_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider_base_url: String,
    /// History window requested from the provider, e.g. "2y".
    pub history_range: String,
    /// Bar interval requested from the provider, e.g. "1d".
    pub history_interval: String,
    pub default_equity: f64,
    /// Fraction of equity risked per trade when the caller supplies none.
    pub default_risk_fraction: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            provider_base_url: "https://query1.finance.yahoo.com".to_string(),
            history_range: "2y".to_string(),
            history_interval: "1d".to_string(),
            default_equity: 10_000.0,
            default_risk_fraction: 0.04,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            config.port = port;
        }
        if let Ok(base_url) = env::var("SYGNAL_PROVIDER_BASE_URL") {
            config.provider_base_url = base_url;
        }
        if let Ok(range) = env::var("SYGNAL_HISTORY_RANGE") {
            config.history_range = range;
        }
        if let Ok(interval) = env::var("SYGNAL_HISTORY_INTERVAL") {
            config.history_interval = interval;
        }
        if let Some(equity) = env::var("SYGNAL_DEFAULT_EQUITY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.default_equity = equity;
        }
        if let Some(risk_pct) = env::var("SYGNAL_DEFAULT_RISK_PCT")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
        {
            config.default_risk_fraction = risk_pct / 100.0;
        }
        config
    }
}
