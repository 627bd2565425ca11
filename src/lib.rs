//! Voltage/current capture analysis: schema-qualified CSV loading and
//! per-signal statistics with dominant-frequency detection.

pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod state;
pub mod stats;

pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use state::{AnalyzerState, Signal, SignalStats};
