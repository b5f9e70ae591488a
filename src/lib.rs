//! Sygnal: a two-strategy trading signal engine.
//!
//! Evaluates a channel-breakout trend-following rule set and an RSI
//! mean-reversion rule set against daily OHLC history, and emits an entry
//! decision with position sizing plus exit advice for open positions.

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod risk;
pub mod services;
pub mod signals;
pub mod strategies;
