//! Price-structure indicators: rolling channels

pub mod channels;

pub use channels::*;
