//! Position sizing from account risk and stop distance.

/// Units to trade so that getting stopped out loses `equity * risk_fraction`.
///
/// A zero or negative risk per unit (stop on the entry price, zero ATR,
/// zero multiplier) sizes to 0 rather than failing; callers suppress
/// size-dependent display and still show the rest of the decision.
pub fn position_size(
    entry_price: f64,
    stop_price: f64,
    equity: f64,
    risk_fraction: f64,
    contract_multiplier: f64,
) -> f64 {
    let risk_per_unit = (entry_price - stop_price).abs() * contract_multiplier;
    if risk_per_unit > 0.0 {
        equity * risk_fraction / risk_per_unit
    } else {
        0.0
    }
}
