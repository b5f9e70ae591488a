//! Rolling price channels (Donchian-style extrema).

/// Rolling maximum over the `window` bars strictly before each index, so a
/// bar never sees its own value when tested against the channel. Defined
/// from index `window` onward.
pub fn lagged_rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }
    for i in window..values.len() {
        let max = values[i - window..i]
            .iter()
            .fold(f64::NEG_INFINITY, |a, &v| a.max(v));
        out[i] = Some(max);
    }
    out
}

/// Lagged counterpart of [`lagged_rolling_max`] for the channel floor.
pub fn lagged_rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }
    for i in window..values.len() {
        let min = values[i - window..i]
            .iter()
            .fold(f64::INFINITY, |a, &v| a.min(v));
        out[i] = Some(min);
    }
    out
}

/// Maximum over the trailing `window` values including the last one. Used
/// for trailing-stop levels, which are advisory and may see the current bar.
pub fn window_high(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    Some(
        values[values.len() - window..]
            .iter()
            .fold(f64::NEG_INFINITY, |a, &v| a.max(v)),
    )
}

/// Minimum over the trailing `window` values including the last one.
pub fn window_low(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    Some(
        values[values.len() - window..]
            .iter()
            .fold(f64::INFINITY, |a, &v| a.min(v)),
    )
}
