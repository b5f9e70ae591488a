//! Unit tests for position sizing

use sygnal::risk::position_size;

#[test]
fn size_caps_loss_at_cash_risk() {
    // $400 risked over a $5 stop distance buys 80 units.
    let size = position_size(100.0, 95.0, 10_000.0, 0.04, 1.0);
    assert_eq!(size, 80.0);
}

#[test]
fn short_side_uses_absolute_stop_distance() {
    let size = position_size(95.0, 100.0, 10_000.0, 0.04, 1.0);
    assert_eq!(size, 80.0);
}

#[test]
fn contract_multiplier_scales_risk_per_unit() {
    let size = position_size(100.0, 99.0, 10_000.0, 0.04, 400.0);
    assert_eq!(size, 1.0);
}

#[test]
fn stop_on_entry_sizes_to_zero() {
    let size = position_size(100.0, 100.0, 10_000.0, 0.04, 1.0);
    assert_eq!(size, 0.0);
}

#[test]
fn zero_multiplier_sizes_to_zero() {
    let size = position_size(100.0, 95.0, 10_000.0, 0.04, 0.0);
    assert_eq!(size, 0.0);
}
