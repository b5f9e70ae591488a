//! Signal decision and report types.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::SignalError;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::preset::StrategyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    /// Price at or below the EMA; a flat read counts as down.
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Long,
    Short,
}

/// Why no entry was produced, with a diagnostic distance for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoSignalReason {
    /// The trend filter agrees but price has not cleared the entry channel.
    /// `distance` is how far price sits from the breakout level.
    AwaitingBreakout {
        trend: TrendDirection,
        distance: f64,
    },
    /// RSI sits between the entry thresholds. `points_needed` is the signed
    /// RSI move still required toward the nearer side.
    RsiNeutral {
        nearer_side: Side,
        points_needed: f64,
    },
}

/// The discrete recommendation for the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SignalDecision {
    EnterLong {
        entry_price: f64,
        stop_price: f64,
        size: f64,
    },
    EnterShort {
        entry_price: f64,
        stop_price: f64,
        size: f64,
    },
    NoSignal {
        reason: NoSignalReason,
    },
}

/// Advice for an already-open position, independent of the entry decision.
/// Trailing stops are only produced by the trend rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExitAdvice {
    pub long_exit_suggested: bool,
    pub short_exit_suggested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_trailing_stop: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_trailing_stop: Option<f64>,
}

/// Directional outcome of a strategy rule, before sizing is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntrySignal {
    Long { entry_price: f64, stop_price: f64 },
    Short { entry_price: f64, stop_price: f64 },
    None { reason: NoSignalReason },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleOutcome {
    pub entry: EntrySignal,
    pub exit: ExitAdvice,
}

/// Account context used to size an entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskContext {
    equity: f64,
    risk_fraction: f64,
}

impl RiskContext {
    pub fn new(equity: f64, risk_fraction: f64) -> Result<Self, SignalError> {
        if !equity.is_finite() || equity <= 0.0 {
            return Err(SignalError::Configuration(format!(
                "equity must be positive, got {equity}"
            )));
        }
        if !risk_fraction.is_finite() || risk_fraction <= 0.0 || risk_fraction > 1.0 {
            return Err(SignalError::Configuration(format!(
                "risk fraction must be in (0, 1], got {risk_fraction}"
            )));
        }
        Ok(Self {
            equity,
            risk_fraction,
        })
    }

    pub fn equity(&self) -> f64 {
        self.equity
    }

    pub fn risk_fraction(&self) -> f64 {
        self.risk_fraction
    }

    /// Cash amount a stopped-out entry is allowed to lose.
    pub fn cash_risk(&self) -> f64 {
        self.equity * self.risk_fraction
    }
}

/// Everything the presentation layer needs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalReport {
    pub symbol: String,
    pub strategy: StrategyKind,
    pub evaluated_at: NaiveDate,
    pub close: f64,
    pub decision: SignalDecision,
    pub exit_advice: ExitAdvice,
    pub cash_risk: f64,
    /// Indicator values at the evaluated bar.
    pub last: IndicatorSnapshot,
    /// Indicator values one bar earlier, for delta readouts.
    pub prev: IndicatorSnapshot,
}
