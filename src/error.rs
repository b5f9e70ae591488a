//! Engine error taxonomy.

use thiserror::Error;

/// Hard failures of a signal evaluation. All of these abort the whole
/// evaluation; there is no partial result. A degenerate risk-per-unit is
/// deliberately not here: sizing resolves it softly to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The provider returned nothing usable for the requested instrument.
    #[error("price data unavailable: {reason}")]
    DataUnavailable { reason: String },

    /// The series is shorter than the longest requested lookback allows.
    #[error("insufficient history: need at least {required} bars, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// A preset or parameter set failed validation at load time.
    #[error("configuration error: {0}")]
    Configuration(String),
}
