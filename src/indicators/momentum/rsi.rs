//! RSI (Relative Strength Index), unsmoothed classic variant.

/// Per-bar RSI over simple rolling means of gains and losses.
///
/// RSI = 100 - 100 / (1 + avg_gain / avg_loss). The window covers `period`
/// price deltas, so `rsi[i]` is `None` for `i < period`. A window whose
/// average loss is exactly zero (including a fully flat window) saturates
/// to 100.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let mut gains = vec![0.0; closes.len()];
    let mut losses = vec![0.0; closes.len()];
    for i in 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    for i in period..closes.len() {
        let start = i + 1 - period;
        let avg_gain = gains[start..=i].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[start..=i].iter().sum::<f64>() / period as f64;
        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        };
        out[i] = Some(rsi);
    }
    out
}
