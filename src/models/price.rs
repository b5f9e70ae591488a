//! Daily OHLC price history types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SignalError;

/// One daily bar. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    fn is_well_formed(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// An ordered daily price history for one instrument, ascending by date with
/// no duplicates. Construction validates; afterwards the series is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn from_bars(bars: Vec<PriceBar>) -> Result<Self, SignalError> {
        if bars.is_empty() {
            return Err(SignalError::DataUnavailable {
                reason: "empty price series".to_string(),
            });
        }
        for bar in &bars {
            if !bar.is_well_formed() {
                return Err(SignalError::DataUnavailable {
                    reason: format!("malformed bar at {}", bar.date),
                });
            }
        }
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SignalError::DataUnavailable {
                    reason: format!(
                        "dates not strictly ascending: {} then {}",
                        pair[0].date, pair[1].date
                    ),
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// The most recent bar. The series is never empty.
    pub fn last(&self) -> &PriceBar {
        self.bars.last().expect("series is non-empty by construction")
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }
}
