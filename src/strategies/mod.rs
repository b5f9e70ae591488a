//! Strategy rule sets: each consumes the latest indicator values and
//! produces a directional outcome plus exit advice.

pub mod mean_reversion;
pub mod trend_breakout;

use crate::error::SignalError;
use crate::models::indicators::IndicatorSeries;
use crate::models::preset::StrategyParameters;
use crate::models::price::PriceSeries;
use crate::models::signal::RuleOutcome;

/// Dispatch to the rule set matching the parameter variant.
pub fn evaluate(
    series: &PriceSeries,
    indicators: &IndicatorSeries,
    params: &StrategyParameters,
) -> Result<RuleOutcome, SignalError> {
    match params {
        StrategyParameters::TrendBreakout(p) => trend_breakout::evaluate(series, indicators, p),
        StrategyParameters::MeanReversion(p) => mean_reversion::evaluate(series, indicators, p),
    }
}
