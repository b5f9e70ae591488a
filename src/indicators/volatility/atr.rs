//! ATR (Average True Range), in both smoothing variants.

use crate::models::price::PriceBar;

/// True range per bar: max of high-low, |high - prev close|, |low - prev
/// close|. The first bar has no previous close, so its true range is just
/// high - low.
pub fn true_ranges(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            if i == 0 {
                bar.high - bar.low
            } else {
                let prev_close = bars[i - 1].close;
                (bar.high - bar.low)
                    .abs()
                    .max((bar.high - prev_close).abs())
                    .max((bar.low - prev_close).abs())
            }
        })
        .collect()
}

/// Simple rolling mean of true range; `None` until the window fills.
pub fn simple_atr_series(true_ranges: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; true_ranges.len()];
    if period == 0 || true_ranges.len() < period {
        return out;
    }
    let mut window_sum: f64 = true_ranges[..period].iter().sum();
    out[period - 1] = Some(window_sum / period as f64);
    for i in period..true_ranges.len() {
        window_sum += true_ranges[i] - true_ranges[i - period];
        out[i] = Some(window_sum / period as f64);
    }
    out
}

/// Wilder-style ATR: exponential mean of true range with alpha = 1/period,
/// seeded with the first true-range value. Defined at every index.
pub fn wilder_atr_series(true_ranges: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(true_ranges.len());
    if true_ranges.is_empty() || period == 0 {
        return out;
    }
    let alpha = 1.0 / period as f64;
    let mut atr = true_ranges[0];
    out.push(atr);
    for &tr in &true_ranges[1..] {
        atr = alpha * tr + (1.0 - alpha) * atr;
        out.push(atr);
    }
    out
}
