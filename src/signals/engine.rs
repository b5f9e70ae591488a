//! Signal evaluation pipeline: indicators, then the rule set, then sizing.

use crate::error::SignalError;
use crate::indicators;
use crate::models::indicators::IndicatorSeries;
use crate::models::preset::StrategyParameters;
use crate::models::price::PriceSeries;
use crate::models::signal::{EntrySignal, RiskContext, SignalDecision, SignalReport};
use crate::risk;
use crate::strategies;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate the latest bar of `series` under `params`.
    ///
    /// Stateless and deterministic: each call is a fresh evaluation of "if I
    /// looked at this series right now, what would the rule say", so callers
    /// may cache or parallelize freely.
    pub fn evaluate(
        series: &PriceSeries,
        params: &StrategyParameters,
        risk_ctx: &RiskContext,
    ) -> Result<SignalReport, SignalError> {
        Self::evaluate_with_indicators(series, params, risk_ctx).map(|(report, _)| report)
    }

    /// Evaluate and also return the full indicator columns, for callers that
    /// chart the evaluated window.
    pub fn evaluate_with_indicators(
        series: &PriceSeries,
        params: &StrategyParameters,
        risk_ctx: &RiskContext,
    ) -> Result<(SignalReport, IndicatorSeries), SignalError> {
        let request = params.indicator_request();

        // One bar beyond the indicator requirement: the report carries the
        // previous bar's snapshot for delta readouts.
        let required = request.max_period() + 2;
        if series.len() < required {
            return Err(SignalError::InsufficientHistory {
                required,
                actual: series.len(),
            });
        }

        let indicators = indicators::compute(series, &request)?;
        let outcome = strategies::evaluate(series, &indicators, params)?;

        let last = series.len() - 1;
        let last_bar = series.last();

        let decision = match outcome.entry {
            EntrySignal::Long {
                entry_price,
                stop_price,
            } => SignalDecision::EnterLong {
                entry_price,
                stop_price,
                size: risk::position_size(
                    entry_price,
                    stop_price,
                    risk_ctx.equity(),
                    risk_ctx.risk_fraction(),
                    params.contract_multiplier(),
                ),
            },
            EntrySignal::Short {
                entry_price,
                stop_price,
            } => SignalDecision::EnterShort {
                entry_price,
                stop_price,
                size: risk::position_size(
                    entry_price,
                    stop_price,
                    risk_ctx.equity(),
                    risk_ctx.risk_fraction(),
                    params.contract_multiplier(),
                ),
            },
            EntrySignal::None { reason } => SignalDecision::NoSignal { reason },
        };

        let report = SignalReport {
            symbol: params.symbol().to_string(),
            strategy: params.kind(),
            evaluated_at: last_bar.date,
            close: last_bar.close,
            decision,
            exit_advice: outcome.exit,
            cash_risk: risk_ctx.cash_risk(),
            last: indicators.snapshot(last),
            prev: indicators.snapshot(last - 1),
        };

        Ok((report, indicators))
    }
}
