//! Technical indicator computation over a daily price series.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

use crate::error::SignalError;
use crate::models::indicators::{AtrSmoothing, IndicatorRequest, IndicatorSeries};
use crate::models::price::PriceSeries;

/// Compute the requested indicator columns for every bar of `series`.
///
/// Pure function of the series and the request: no side effects, and
/// repeated calls with identical inputs produce bit-identical output. Fails
/// when the series is shorter than the longest requested lookback plus one
/// bar.
pub fn compute(
    series: &PriceSeries,
    request: &IndicatorRequest,
) -> Result<IndicatorSeries, SignalError> {
    let required = request.max_period() + 1;
    if series.len() < required {
        return Err(SignalError::InsufficientHistory {
            required,
            actual: series.len(),
        });
    }

    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    let mut out = IndicatorSeries::new(series.len());

    if let Some(period) = request.rsi_period {
        out.rsi = momentum::rsi_series(&closes, period);
    }
    if let Some(atr) = request.atr {
        let tr = volatility::true_ranges(series.bars());
        out.atr = match atr.smoothing {
            AtrSmoothing::Simple => volatility::simple_atr_series(&tr, atr.period),
            AtrSmoothing::Wilder => volatility::wilder_atr_series(&tr, atr.period)
                .into_iter()
                .map(Some)
                .collect(),
        };
    }
    if let Some(span) = request.ema_period {
        out.ema = trend::ema_series(&closes, span)
            .into_iter()
            .map(Some)
            .collect();
    }
    if let Some(window) = request.entry_channel {
        out.highest_in = structure::lagged_rolling_max(&highs, window);
        out.lowest_in = structure::lagged_rolling_min(&lows, window);
    }
    if let Some(window) = request.exit_channel {
        out.highest_out = structure::lagged_rolling_max(&highs, window);
        out.lowest_out = structure::lagged_rolling_min(&lows, window);
    }

    Ok(out)
}
