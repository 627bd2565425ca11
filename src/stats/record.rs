use std::fmt;

use serde::Serialize;

pub const MIN_PEAK: &str = "Min Peak";
pub const MAX_PEAK: &str = "Max Peak";
pub const DELTA_PEAKS: &str = "Delta Peaks";
pub const RMS_NOISE: &str = "RMS Noise";
pub const PK_PK_NOISE: &str = "Pk-Pk Noise";
pub const DOMINANT_FREQ: &str = "Dominant Freq";

/// Record names in the order [`StatisticsEngine::compute`](super::StatisticsEngine::compute)
/// produces them.
pub const STAT_NAMES: [&str; 6] = [
    MIN_PEAK,
    MAX_PEAK,
    DELTA_PEAKS,
    RMS_NOISE,
    PK_PK_NOISE,
    DOMINANT_FREQ,
];

/// A named, unit-tagged summary value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRecord {
    pub name: &'static str,
    pub value: f64,
    pub unit: String,
}

impl StatRecord {
    pub fn new(name: &'static str, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name,
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for StatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3e} {}", self.name, self.value, self.unit)
    }
}

/// Look up a record by name.
pub fn find<'a>(stats: &'a [StatRecord], name: &str) -> Option<&'a StatRecord> {
    stats.iter().find(|s| s.name == name)
}
