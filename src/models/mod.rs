//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod preset;
pub mod price;
pub mod signal;

pub use indicators::{
    AtrRequest, AtrSmoothing, IndicatorRequest, IndicatorSeries, IndicatorSnapshot,
};
pub use preset::{MeanReversionParams, StrategyKind, StrategyParameters, TrendBreakoutParams};
pub use price::{PriceBar, PriceSeries};
pub use signal::{
    EntrySignal, ExitAdvice, NoSignalReason, RiskContext, RuleOutcome, Side, SignalDecision,
    SignalReport, TrendDirection,
};
