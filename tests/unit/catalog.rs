//! Unit tests for the typed preset catalog

use sygnal::catalog::Catalog;
use sygnal::error::SignalError;
use sygnal::models::preset::StrategyParameters;

#[test]
fn builtin_catalog_loads_full_portfolio() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 28);
}

#[test]
fn builtin_catalog_has_trend_preset_with_typed_fields() {
    let catalog = Catalog::builtin().unwrap();
    let preset = catalog.get("Bitcoin").unwrap();
    match &preset.parameters {
        StrategyParameters::TrendBreakout(p) => {
            assert_eq!(p.symbol, "BTC-USD");
            assert_eq!(p.entry_lookback, 60);
            assert_eq!(p.exit_lookback, 30);
            assert_eq!(p.ema_period, 100);
            assert_eq!(p.atr_period, 14);
            assert_eq!(p.stop_multiplier, 5.0);
            assert_eq!(p.trailing_multiplier, 4.0);
        }
        other => panic!("expected trend breakout preset, got {other:?}"),
    }
}

#[test]
fn builtin_catalog_has_mean_reversion_preset_with_typed_fields() {
    let catalog = Catalog::builtin().unwrap();
    let preset = catalog.get("Gold").unwrap();
    match &preset.parameters {
        StrategyParameters::MeanReversion(p) => {
            assert_eq!(p.symbol, "GC=F");
            assert_eq!(p.rsi_period, 14);
            assert_eq!(p.long_entry, 30.0);
            assert_eq!(p.short_entry, 90.0);
            assert_eq!(p.contract_multiplier, 100.0);
        }
        other => panic!("expected mean reversion preset, got {other:?}"),
    }
}

#[test]
fn unknown_preset_lookup_returns_none() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.get("Copper").is_none());
}

#[test]
fn missing_field_for_variant_is_rejected() {
    // A trend preset without its EMA period must not default silently.
    let json = r#"[{
        "name": "Broken",
        "symbol": "X",
        "strategy": "trend_breakout",
        "contract_multiplier": 1.0,
        "leverage": 1.0,
        "entry_lookback": 10,
        "exit_lookback": 5,
        "atr_period": 14,
        "stop_multiplier": 2.0,
        "trailing_multiplier": 2.0
    }]"#;
    match Catalog::from_json(json).unwrap_err() {
        SignalError::Configuration(msg) => {
            assert!(msg.contains("ema_period"), "unexpected message: {msg}")
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn duplicate_preset_names_are_rejected() {
    let json = r#"[
        {"name": "Twin", "symbol": "A", "strategy": "mean_reversion",
         "contract_multiplier": 1.0, "leverage": 1.0, "rsi_period": 14,
         "atr_period": 14, "stop_multiplier": 2.0, "long_entry": 30.0,
         "long_exit": 60.0, "short_entry": 70.0, "short_exit": 50.0},
        {"name": "Twin", "symbol": "B", "strategy": "mean_reversion",
         "contract_multiplier": 1.0, "leverage": 1.0, "rsi_period": 14,
         "atr_period": 14, "stop_multiplier": 2.0, "long_entry": 30.0,
         "long_exit": 60.0, "short_entry": 70.0, "short_exit": 50.0}
    ]"#;
    match Catalog::from_json(json).unwrap_err() {
        SignalError::Configuration(msg) => {
            assert!(msg.contains("duplicate"), "unexpected message: {msg}")
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn rsi_threshold_outside_scale_is_rejected() {
    let json = r#"[{
        "name": "Broken", "symbol": "X", "strategy": "mean_reversion",
        "contract_multiplier": 1.0, "leverage": 1.0, "rsi_period": 14,
        "atr_period": 14, "stop_multiplier": 2.0, "long_entry": 150.0,
        "long_exit": 60.0, "short_entry": 70.0, "short_exit": 50.0
    }]"#;
    assert!(matches!(
        Catalog::from_json(json).unwrap_err(),
        SignalError::Configuration(_)
    ));
}

#[test]
fn zero_lookback_is_rejected() {
    let json = r#"[{
        "name": "Broken", "symbol": "X", "strategy": "mean_reversion",
        "contract_multiplier": 1.0, "leverage": 1.0, "rsi_period": 0,
        "atr_period": 14, "stop_multiplier": 2.0, "long_entry": 30.0,
        "long_exit": 60.0, "short_entry": 70.0, "short_exit": 50.0
    }]"#;
    assert!(matches!(
        Catalog::from_json(json).unwrap_err(),
        SignalError::Configuration(_)
    ));
}

#[test]
fn empty_symbol_is_rejected() {
    let json = r#"[{
        "name": "Broken", "symbol": "  ", "strategy": "mean_reversion",
        "contract_multiplier": 1.0, "leverage": 1.0, "rsi_period": 14,
        "atr_period": 14, "stop_multiplier": 2.0, "long_entry": 30.0,
        "long_exit": 60.0, "short_entry": 70.0, "short_exit": 50.0
    }]"#;
    assert!(matches!(
        Catalog::from_json(json).unwrap_err(),
        SignalError::Configuration(_)
    ));
}
