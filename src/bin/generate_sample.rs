use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const SAMPLE_RATE_HZ: f64 = 1000.0;
const SAMPLES: usize = 2000;

/// Seeded Gaussian noise so repeated runs write identical files.
///
/// Uniform draws come from SplitMix64; normal draws use the Marsaglia polar
/// method, caching the second value of each accepted pair.
struct Noise {
    seed: u64,
    spare: Option<f64>,
}

impl Noise {
    fn seeded(seed: u64) -> Self {
        Self { seed, spare: None }
    }

    fn next_bits(&mut self) -> u64 {
        self.seed = self.seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.seed;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [-1, 1).
    fn signed_unit(&mut self) -> f64 {
        (self.next_bits() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }

    /// One draw from N(0, sigma²).
    fn sample(&mut self, sigma: f64) -> f64 {
        if let Some(z) = self.spare.take() {
            return sigma * z;
        }
        loop {
            let u = self.signed_unit();
            let v = self.signed_unit();
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let scale = (-2.0 * s.ln() / s).sqrt();
                self.spare = Some(v * scale);
                return sigma * u * scale;
            }
        }
    }
}

/// `offset + amplitude * sin(2π f t)` plus Gaussian noise.
fn tone(freq_hz: f64, amplitude: f64, offset: f64, noise: f64, rng: &mut Noise) -> Vec<f64> {
    (0..SAMPLES)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE_HZ;
            offset + amplitude * (2.0 * PI * freq_hz * t).sin() + rng.sample(noise)
        })
        .collect()
}

fn write_capture(path: &Path, header: &[&str], columns: &[Vec<f64>]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(header)?;
    for row in 0..SAMPLES {
        let record: Vec<String> = columns.iter().map(|col| format!("{:.6}", col[row])).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    println!("Wrote {SAMPLES} rows to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = Noise::seeded(42);

    // 50 Hz mains-like tone on both signals.
    let voltage = tone(50.0, 2.5, 0.0, 0.01, &mut rng);
    let current = tone(50.0, 0.8, 0.0, 0.005, &mut rng);
    write_capture(
        &out_dir.join("sine_50hz.csv"),
        &["voltage", "current"],
        &[voltage, current],
    )?;

    // DC rail with a small 120 Hz ripple.
    let voltage = tone(120.0, 0.02, 3.3, 0.002, &mut rng);
    let current = tone(120.0, 0.001, 0.25, 0.0005, &mut rng);
    write_capture(
        &out_dir.join("noisy_dc.csv"),
        &["current", "voltage"],
        &[current, voltage],
    )?;

    // Header outside the schema: never listed.
    let time: Vec<f64> = (0..SAMPLES).map(|i| i as f64 / SAMPLE_RATE_HZ).collect();
    let voltage = tone(10.0, 1.0, 0.0, 0.0, &mut rng);
    write_capture(
        &out_dir.join("other_columns.csv"),
        &["time", "voltage"],
        &[time, voltage],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_noise() {
        let mut a = Noise::seeded(7);
        let mut b = Noise::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.sample(1.0).to_bits(), b.sample(1.0).to_bits());
        }
    }

    #[test]
    fn noise_has_requested_spread() {
        let mut noise = Noise::seeded(42);
        let draws: Vec<f64> = (0..20_000).map(|_| noise.sample(0.5)).collect();
        let n = draws.len() as f64;
        let mean = draws.iter().sum::<f64>() / n;
        let std_dev = (draws.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
        assert!(mean.abs() < 0.02);
        assert!((std_dev - 0.5).abs() < 0.02);
    }

    #[test]
    fn unit_draws_stay_in_range() {
        let mut noise = Noise::seeded(1);
        assert!((0..1000).map(|_| noise.signed_unit()).all(|u| (-1.0..1.0).contains(&u)));
    }
}
