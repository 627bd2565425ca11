//! Descriptive and spectral statistics over one numeric series.

pub mod engine;
pub mod record;
pub mod spectrum;

pub use engine::{StatisticsEngine, DEFAULT_SAMPLE_RATE_HZ, PK_PK_SIGMA_MULTIPLIER};
pub use record::{StatRecord, STAT_NAMES};
