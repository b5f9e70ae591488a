//! RSI threshold mean-reversion entries with a fixed ATR stop.

use crate::error::SignalError;
use crate::models::indicators::IndicatorSeries;
use crate::models::preset::MeanReversionParams;
use crate::models::price::PriceSeries;
use crate::models::signal::{EntrySignal, ExitAdvice, NoSignalReason, RuleOutcome, Side};

/// Evaluate the mean-reversion rule set against the latest bar.
///
/// Long iff RSI is strictly below the long entry threshold; short iff
/// strictly above the short entry threshold. RSI sitting exactly on a
/// threshold is no-signal. There is no trend filter, and the stop is fixed
/// at entry time rather than trailed.
pub fn evaluate(
    series: &PriceSeries,
    indicators: &IndicatorSeries,
    params: &MeanReversionParams,
) -> Result<RuleOutcome, SignalError> {
    let last = series.len() - 1;
    let close = series.last().close;

    let required = params.rsi_period.max(params.atr_period) + 1;
    let missing = || SignalError::InsufficientHistory {
        required,
        actual: series.len(),
    };

    let rsi = IndicatorSeries::value(&indicators.rsi, last).ok_or_else(missing)?;
    let atr = IndicatorSeries::value(&indicators.atr, last).ok_or_else(missing)?;

    let entry = if rsi < params.long_entry {
        EntrySignal::Long {
            entry_price: close,
            stop_price: close - params.stop_multiplier * atr,
        }
    } else if rsi > params.short_entry {
        EntrySignal::Short {
            entry_price: close,
            stop_price: close + params.stop_multiplier * atr,
        }
    } else if rsi < 50.0 {
        EntrySignal::None {
            reason: NoSignalReason::RsiNeutral {
                nearer_side: Side::Long,
                points_needed: rsi - params.long_entry,
            },
        }
    } else {
        EntrySignal::None {
            reason: NoSignalReason::RsiNeutral {
                nearer_side: Side::Short,
                points_needed: params.short_entry - rsi,
            },
        }
    };

    let exit = ExitAdvice {
        long_exit_suggested: rsi > params.long_exit,
        short_exit_suggested: rsi < params.short_exit,
        long_trailing_stop: None,
        short_trailing_stop: None,
    };

    Ok(RuleOutcome { entry, exit })
}
