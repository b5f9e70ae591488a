//! Strategy parameter records. Loaded once per evaluation, never mutated.

use serde::{Deserialize, Serialize};

use crate::models::indicators::{AtrRequest, AtrSmoothing, IndicatorRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    TrendBreakout,
    MeanReversion,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::TrendBreakout => "trend_breakout",
            StrategyKind::MeanReversion => "mean_reversion",
        }
    }
}

/// Channel-breakout trend system parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBreakoutParams {
    pub symbol: String,
    /// Entry channel lookback (bars), the "IN" window.
    pub entry_lookback: usize,
    /// Exit channel lookback (bars), the "OUT" window.
    pub exit_lookback: usize,
    pub ema_period: usize,
    pub atr_period: usize,
    /// Stop distance at entry, in ATR multiples ("M").
    pub stop_multiplier: f64,
    /// Trailing stop distance from the window extreme, in ATR multiples ("K").
    pub trailing_multiplier: f64,
    pub contract_multiplier: f64,
    pub leverage: f64,
}

/// RSI mean-reversion system parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanReversionParams {
    pub symbol: String,
    pub rsi_period: usize,
    pub atr_period: usize,
    /// Stop distance at entry, in ATR multiples ("M").
    pub stop_multiplier: f64,
    /// Enter long when RSI falls below this.
    pub long_entry: f64,
    /// Close a long when RSI rises above this.
    pub long_exit: f64,
    /// Enter short when RSI rises above this.
    pub short_entry: f64,
    /// Close a short when RSI falls below this.
    pub short_exit: f64,
    pub contract_multiplier: f64,
    pub leverage: f64,
}

/// The two rule-set variants the engine evaluates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyParameters {
    TrendBreakout(TrendBreakoutParams),
    MeanReversion(MeanReversionParams),
}

impl StrategyParameters {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyParameters::TrendBreakout(_) => StrategyKind::TrendBreakout,
            StrategyParameters::MeanReversion(_) => StrategyKind::MeanReversion,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            StrategyParameters::TrendBreakout(p) => &p.symbol,
            StrategyParameters::MeanReversion(p) => &p.symbol,
        }
    }

    pub fn contract_multiplier(&self) -> f64 {
        match self {
            StrategyParameters::TrendBreakout(p) => p.contract_multiplier,
            StrategyParameters::MeanReversion(p) => p.contract_multiplier,
        }
    }

    /// The indicator columns this variant needs.
    pub fn indicator_request(&self) -> IndicatorRequest {
        match self {
            StrategyParameters::TrendBreakout(p) => IndicatorRequest {
                rsi_period: None,
                atr: Some(AtrRequest {
                    period: p.atr_period,
                    smoothing: AtrSmoothing::Wilder,
                }),
                ema_period: Some(p.ema_period),
                entry_channel: Some(p.entry_lookback),
                exit_channel: Some(p.exit_lookback),
            },
            StrategyParameters::MeanReversion(p) => IndicatorRequest {
                rsi_period: Some(p.rsi_period),
                atr: Some(AtrRequest {
                    period: p.atr_period,
                    smoothing: AtrSmoothing::Simple,
                }),
                ema_period: None,
                entry_channel: None,
                exit_channel: None,
            },
        }
    }
}
