//! Channel-breakout entries gated by an EMA trend filter.

use crate::error::SignalError;
use crate::indicators::structure;
use crate::models::indicators::IndicatorSeries;
use crate::models::preset::TrendBreakoutParams;
use crate::models::price::PriceSeries;
use crate::models::signal::{
    EntrySignal, ExitAdvice, NoSignalReason, RuleOutcome, TrendDirection,
};

/// Evaluate the trend rule set against the latest bar.
///
/// Long iff close is above the EMA and above the highest high of the
/// preceding entry window; short is the mirror below. The two are mutually
/// exclusive because the EMA filter splits them; a close exactly on the EMA
/// counts as down-trend-or-flat.
pub fn evaluate(
    series: &PriceSeries,
    indicators: &IndicatorSeries,
    params: &TrendBreakoutParams,
) -> Result<RuleOutcome, SignalError> {
    let last = series.len() - 1;
    let close = series.last().close;

    let required = params
        .entry_lookback
        .max(params.exit_lookback)
        .max(params.ema_period)
        .max(params.atr_period)
        + 1;
    let missing = || SignalError::InsufficientHistory {
        required,
        actual: series.len(),
    };

    let ema = IndicatorSeries::value(&indicators.ema, last).ok_or_else(missing)?;
    let atr = IndicatorSeries::value(&indicators.atr, last).ok_or_else(missing)?;
    let highest_in = IndicatorSeries::value(&indicators.highest_in, last).ok_or_else(missing)?;
    let lowest_in = IndicatorSeries::value(&indicators.lowest_in, last).ok_or_else(missing)?;
    let highest_out = IndicatorSeries::value(&indicators.highest_out, last).ok_or_else(missing)?;
    let lowest_out = IndicatorSeries::value(&indicators.lowest_out, last).ok_or_else(missing)?;

    let trend_up = close > ema;
    let trend_down = close < ema;

    let entry = if trend_up && close > highest_in {
        EntrySignal::Long {
            entry_price: close,
            stop_price: close - params.stop_multiplier * atr,
        }
    } else if trend_down && close < lowest_in {
        EntrySignal::Short {
            entry_price: close,
            stop_price: close + params.stop_multiplier * atr,
        }
    } else if trend_up {
        EntrySignal::None {
            reason: NoSignalReason::AwaitingBreakout {
                trend: TrendDirection::Up,
                distance: highest_in - close,
            },
        }
    } else {
        // Down-trend without a breakdown, or close exactly on the EMA.
        EntrySignal::None {
            reason: NoSignalReason::AwaitingBreakout {
                trend: TrendDirection::Down,
                distance: close - lowest_in,
            },
        }
    };

    // Trailing stops track the current window, last bar included; the exit
    // channel stays lagged so a bar never confirms its own extreme.
    let window_high =
        structure::window_high(&series.highs(), params.entry_lookback).ok_or_else(missing)?;
    let window_low =
        structure::window_low(&series.lows(), params.entry_lookback).ok_or_else(missing)?;

    let exit = ExitAdvice {
        long_exit_suggested: close < lowest_out,
        short_exit_suggested: close > highest_out,
        long_trailing_stop: Some(window_high - params.trailing_multiplier * atr),
        short_trailing_stop: Some(window_low + params.trailing_multiplier * atr),
    };

    Ok(RuleOutcome { entry, exit })
}
