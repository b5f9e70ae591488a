//! Indicator request, per-bar column, and snapshot types.

use serde::Serialize;

/// Which ATR smoothing a strategy wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtrSmoothing {
    /// Simple rolling mean of true range (mean-reversion rule set).
    Simple,
    /// Exponential mean with alpha = 1/period, Wilder style (trend rule set).
    Wilder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtrRequest {
    pub period: usize,
    pub smoothing: AtrSmoothing,
}

/// The indicator columns an evaluation needs, with their lookbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorRequest {
    pub rsi_period: Option<usize>,
    pub atr: Option<AtrRequest>,
    pub ema_period: Option<usize>,
    pub entry_channel: Option<usize>,
    pub exit_channel: Option<usize>,
}

impl IndicatorRequest {
    /// Longest lookback among the requested indicators.
    pub fn max_period(&self) -> usize {
        [
            self.rsi_period,
            self.atr.map(|a| a.period),
            self.ema_period,
            self.entry_channel,
            self.exit_channel,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
    }
}

/// Per-bar indicator columns aligned by index with the source price series.
///
/// A column is empty when it was not requested. Within a requested column an
/// entry is `None` while its own lookback window is not yet fully populated;
/// callers must only read values at or after that point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSeries {
    len: usize,
    pub rsi: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
    pub ema: Vec<Option<f64>>,
    pub highest_in: Vec<Option<f64>>,
    pub lowest_in: Vec<Option<f64>>,
    pub highest_out: Vec<Option<f64>>,
    pub lowest_out: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of a column at `index`; `None` for unrequested columns and
    /// unfilled windows alike.
    pub fn value(column: &[Option<f64>], index: usize) -> Option<f64> {
        column.get(index).copied().flatten()
    }

    /// All requested indicator values at one bar.
    pub fn snapshot(&self, index: usize) -> IndicatorSnapshot {
        IndicatorSnapshot {
            rsi: Self::value(&self.rsi, index),
            atr: Self::value(&self.atr, index),
            ema: Self::value(&self.ema, index),
            highest_in: Self::value(&self.highest_in, index),
            lowest_in: Self::value(&self.lowest_in, index),
            highest_out: Self::value(&self.highest_out, index),
            lowest_out: Self::value(&self.lowest_out, index),
        }
    }
}

/// Indicator values at a single bar, for display and delta readouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_in: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_in: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_out: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_out: Option<f64>,
}
