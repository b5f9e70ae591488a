//! Unit tests for the channel-breakout trend rule set

use chrono::NaiveDate;
use sygnal::indicators;
use sygnal::models::preset::{StrategyParameters, TrendBreakoutParams};
use sygnal::models::price::{PriceBar, PriceSeries};
use sygnal::models::signal::{EntrySignal, NoSignalReason, TrendDirection};
use sygnal::strategies::trend_breakout;

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            PriceBar::new(
                start + chrono::Days::new(i as u64),
                close,
                close + 1.0,
                close - 1.0,
                close,
            )
        })
        .collect();
    PriceSeries::from_bars(bars).unwrap()
}

fn test_params() -> TrendBreakoutParams {
    TrendBreakoutParams {
        symbol: "TEST".to_string(),
        entry_lookback: 3,
        exit_lookback: 2,
        ema_period: 3,
        atr_period: 2,
        stop_multiplier: 1.0,
        trailing_multiplier: 1.0,
        contract_multiplier: 1.0,
        leverage: 1.0,
    }
}

fn evaluate(closes: &[f64]) -> (PriceSeries, sygnal::models::signal::RuleOutcome) {
    let params = test_params();
    let series = series_from_closes(closes);
    let request = StrategyParameters::TrendBreakout(params.clone()).indicator_request();
    let indicators = indicators::compute(&series, &request).unwrap();
    let outcome = trend_breakout::evaluate(&series, &indicators, &params).unwrap();
    (series, outcome)
}

#[test]
fn breakout_above_channel_in_uptrend_enters_long() {
    let (_, outcome) = evaluate(&[10.0, 11.0, 12.0, 13.0, 20.0]);
    match outcome.entry {
        EntrySignal::Long {
            entry_price,
            stop_price,
        } => {
            assert_eq!(entry_price, 20.0);
            // Wilder ATR settles at 5 after the final gap; stop is 1 ATR away.
            assert!((stop_price - 15.0).abs() < 1e-9);
        }
        other => panic!("expected long entry, got {other:?}"),
    }
}

#[test]
fn breakdown_below_channel_in_downtrend_enters_short() {
    let (_, outcome) = evaluate(&[20.0, 19.0, 18.0, 17.0, 10.0]);
    match outcome.entry {
        EntrySignal::Short {
            entry_price,
            stop_price,
        } => {
            assert_eq!(entry_price, 10.0);
            assert!((stop_price - 15.0).abs() < 1e-9);
        }
        other => panic!("expected short entry, got {other:?}"),
    }
}

#[test]
fn uptrend_without_breakout_reports_distance() {
    let (_, outcome) = evaluate(&[10.0, 11.0, 12.0, 13.0, 12.5]);
    match outcome.entry {
        EntrySignal::None {
            reason:
                NoSignalReason::AwaitingBreakout { trend, distance },
        } => {
            assert_eq!(trend, TrendDirection::Up);
            // Channel ceiling is the prior window's high of 14.
            assert!((distance - 1.5).abs() < 1e-9);
        }
        other => panic!("expected awaiting breakout, got {other:?}"),
    }
}

#[test]
fn close_on_the_ema_counts_as_downtrend() {
    // A fully flat series puts the close exactly on the EMA.
    let (_, outcome) = evaluate(&[10.0; 5]);
    match outcome.entry {
        EntrySignal::None {
            reason:
                NoSignalReason::AwaitingBreakout { trend, distance },
        } => {
            assert_eq!(trend, TrendDirection::Down);
            assert!((distance - 1.0).abs() < 1e-9);
        }
        other => panic!("expected awaiting breakout, got {other:?}"),
    }
}

#[test]
fn close_below_exit_channel_suggests_long_exit() {
    let (_, outcome) = evaluate(&[20.0, 19.0, 18.0, 17.0, 10.0]);
    assert!(outcome.exit.long_exit_suggested);
    assert!(!outcome.exit.short_exit_suggested);
}

#[test]
fn close_above_exit_channel_suggests_short_exit() {
    let (_, outcome) = evaluate(&[10.0, 11.0, 12.0, 13.0, 20.0]);
    assert!(outcome.exit.short_exit_suggested);
    assert!(!outcome.exit.long_exit_suggested);
}

#[test]
fn trailing_stops_track_current_window() {
    // The final bar's own high of 21 participates in the trailing window,
    // unlike the lagged entry channel.
    let (_, outcome) = evaluate(&[10.0, 11.0, 12.0, 13.0, 20.0]);
    let long_stop = outcome.exit.long_trailing_stop.unwrap();
    let short_stop = outcome.exit.short_trailing_stop.unwrap();
    assert!((long_stop - 16.0).abs() < 1e-9);
    assert!((short_stop - 16.0).abs() < 1e-9);
}
