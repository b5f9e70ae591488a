//! Typed instrument preset catalog.
//!
//! Each preset names one instrument and carries the full parameter record
//! for its strategy variant. Records are validated when the catalog loads;
//! a preset missing a field its variant needs is a configuration error, not
//! a silent default.

use serde::Deserialize;

use crate::error::SignalError;
use crate::models::preset::{
    MeanReversionParams, StrategyKind, StrategyParameters, TrendBreakoutParams,
};

const BUILTIN_PRESETS: &str = include_str!("presets.json");

/// One preset as it appears on disk. Every strategy-specific field is
/// optional until validated against the declared strategy kind.
#[derive(Debug, Clone, Deserialize)]
struct RawPreset {
    name: String,
    symbol: String,
    strategy: StrategyKind,
    contract_multiplier: Option<f64>,
    leverage: Option<f64>,
    entry_lookback: Option<usize>,
    exit_lookback: Option<usize>,
    ema_period: Option<usize>,
    atr_period: Option<usize>,
    stop_multiplier: Option<f64>,
    trailing_multiplier: Option<f64>,
    rsi_period: Option<usize>,
    long_entry: Option<f64>,
    long_exit: Option<f64>,
    short_entry: Option<f64>,
    short_exit: Option<f64>,
}

impl RawPreset {
    fn validate(self) -> Result<Preset, SignalError> {
        let name = self.name.clone();
        if self.symbol.trim().is_empty() {
            return Err(SignalError::Configuration(format!(
                "preset '{name}': empty symbol"
            )));
        }

        let parameters = match self.strategy {
            StrategyKind::TrendBreakout => StrategyParameters::TrendBreakout(TrendBreakoutParams {
                symbol: self.symbol,
                entry_lookback: require(&name, "entry_lookback", self.entry_lookback)?,
                exit_lookback: require(&name, "exit_lookback", self.exit_lookback)?,
                ema_period: require(&name, "ema_period", self.ema_period)?,
                atr_period: require(&name, "atr_period", self.atr_period)?,
                stop_multiplier: require(&name, "stop_multiplier", self.stop_multiplier)?,
                trailing_multiplier: require(
                    &name,
                    "trailing_multiplier",
                    self.trailing_multiplier,
                )?,
                contract_multiplier: require(
                    &name,
                    "contract_multiplier",
                    self.contract_multiplier,
                )?,
                leverage: require(&name, "leverage", self.leverage)?,
            }),
            StrategyKind::MeanReversion => StrategyParameters::MeanReversion(MeanReversionParams {
                symbol: self.symbol,
                rsi_period: require(&name, "rsi_period", self.rsi_period)?,
                atr_period: require(&name, "atr_period", self.atr_period)?,
                stop_multiplier: require(&name, "stop_multiplier", self.stop_multiplier)?,
                long_entry: require(&name, "long_entry", self.long_entry)?,
                long_exit: require(&name, "long_exit", self.long_exit)?,
                short_entry: require(&name, "short_entry", self.short_entry)?,
                short_exit: require(&name, "short_exit", self.short_exit)?,
                contract_multiplier: require(
                    &name,
                    "contract_multiplier",
                    self.contract_multiplier,
                )?,
                leverage: require(&name, "leverage", self.leverage)?,
            }),
        };

        let preset = Preset { name, parameters };
        preset.check_ranges()?;
        Ok(preset)
    }
}

fn require<T>(preset: &str, field: &str, value: Option<T>) -> Result<T, SignalError> {
    value.ok_or_else(|| {
        SignalError::Configuration(format!("preset '{preset}': missing field '{field}'"))
    })
}

/// A validated catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub parameters: StrategyParameters,
}

impl Preset {
    fn check_ranges(&self) -> Result<(), SignalError> {
        let err = |msg: String| {
            Err(SignalError::Configuration(format!(
                "preset '{}': {msg}",
                self.name
            )))
        };
        match &self.parameters {
            StrategyParameters::TrendBreakout(p) => {
                if p.entry_lookback == 0 || p.exit_lookback == 0 || p.ema_period == 0 {
                    return err("lookback periods must be at least 1".to_string());
                }
                if p.atr_period == 0 {
                    return err("atr_period must be at least 1".to_string());
                }
                if p.stop_multiplier <= 0.0 || p.trailing_multiplier <= 0.0 {
                    return err("stop and trailing multipliers must be positive".to_string());
                }
                if p.contract_multiplier <= 0.0 {
                    return err("contract_multiplier must be positive".to_string());
                }
            }
            StrategyParameters::MeanReversion(p) => {
                if p.rsi_period == 0 || p.atr_period == 0 {
                    return err("lookback periods must be at least 1".to_string());
                }
                if p.stop_multiplier <= 0.0 {
                    return err("stop_multiplier must be positive".to_string());
                }
                if p.contract_multiplier <= 0.0 {
                    return err("contract_multiplier must be positive".to_string());
                }
                for (field, value) in [
                    ("long_entry", p.long_entry),
                    ("long_exit", p.long_exit),
                    ("short_entry", p.short_entry),
                    ("short_exit", p.short_exit),
                ] {
                    if !(0.0..=100.0).contains(&value) {
                        return err(format!("{field} must be within 0..=100, got {value}"));
                    }
                }
            }
        }
        Ok(())
    }
}

/// The full preset portfolio, loaded and validated once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    presets: Vec<Preset>,
}

impl Catalog {
    /// The portfolio compiled into the binary.
    pub fn builtin() -> Result<Self, SignalError> {
        Self::from_json(BUILTIN_PRESETS)
    }

    pub fn from_json(json: &str) -> Result<Self, SignalError> {
        let raw: Vec<RawPreset> = serde_json::from_str(json).map_err(|e| {
            SignalError::Configuration(format!("preset catalog parse error: {e}"))
        })?;
        let presets = raw
            .into_iter()
            .map(RawPreset::validate)
            .collect::<Result<Vec<_>, _>>()?;

        for (i, preset) in presets.iter().enumerate() {
            if presets[..i].iter().any(|p| p.name == preset.name) {
                return Err(SignalError::Configuration(format!(
                    "duplicate preset name '{}'",
                    preset.name
                )));
            }
        }

        Ok(Self { presets })
    }

    pub fn from_json_file(path: &std::path::Path) -> Result<Self, SignalError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            SignalError::Configuration(format!("cannot read preset catalog {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
