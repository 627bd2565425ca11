use std::ops::Range;

use super::record::{
    StatRecord, DELTA_PEAKS, DOMINANT_FREQ, MAX_PEAK, MIN_PEAK, PK_PK_NOISE, RMS_NOISE,
};
use super::spectrum::dominant_frequency;

/// Sample rate assumed for every series unless configured otherwise.
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 1000.0;

/// Peak-to-peak noise estimated as this many standard deviations (±3σ of a
/// Gaussian).
pub const PK_PK_SIGMA_MULTIPLIER: f64 = 6.0;

/// Unit tag of the dominant frequency record.
pub const FREQUENCY_UNIT: &str = "Hz";

/// Computes the six summary statistics of a series.
///
/// Holds only the sample rate, so one engine can be shared across threads and
/// every call is independent of the previous ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsEngine {
    sample_rate_hz: f64,
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ)
    }
}

impl StatisticsEngine {
    pub fn new(sample_rate_hz: f64) -> Self {
        Self { sample_rate_hz }
    }

    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Min Peak, Max Peak, Delta Peaks, RMS Noise, Pk-Pk Noise and Dominant
    /// Freq, in that order. The first five carry `unit`, the last one "Hz".
    /// An empty series yields no records.
    ///
    /// Non-finite samples are not filtered and propagate into the results.
    pub fn compute(&self, series: &[f64], unit: &str) -> Vec<StatRecord> {
        if series.is_empty() {
            return Vec::new();
        }

        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let delta = (max - min).abs();
        let rms_noise = population_std_dev(series);
        let frequency = dominant_frequency(series, self.sample_rate_hz);

        vec![
            StatRecord::new(MIN_PEAK, min, unit),
            StatRecord::new(MAX_PEAK, max, unit),
            StatRecord::new(DELTA_PEAKS, delta, unit),
            StatRecord::new(RMS_NOISE, rms_noise, unit),
            StatRecord::new(PK_PK_NOISE, rms_noise * PK_PK_SIGMA_MULTIPLIER, unit),
            StatRecord::new(DOMINANT_FREQ, frequency, FREQUENCY_UNIT),
        ]
    }

    /// Statistics over the visible index window of a series. The range is
    /// clamped to the series bounds.
    pub fn compute_window(&self, series: &[f64], range: Range<usize>, unit: &str) -> Vec<StatRecord> {
        let end = range.end.min(series.len());
        let start = range.start.min(end);
        self.compute(&series[start..end], unit)
    }
}

/// Standard deviation with divisor N.
fn population_std_dev(series: &[f64]) -> f64 {
    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
