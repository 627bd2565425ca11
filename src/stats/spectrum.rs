use rustfft::{num_complex::Complex64, FftPlanner};

/// Single-sided magnitude spectrum of a real series: `N / 2 + 1` bins of
/// `|X_k|`, unscaled.
pub fn magnitude_spectrum(series: &[f64]) -> Vec<f64> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex64> = series.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    fft.process(&mut buffer);

    buffer.iter().take(n / 2 + 1).map(|c| c.norm()).collect()
}

/// Frequency in Hz of bin `k` of an `n`-sample real FFT.
pub fn bin_frequency(k: usize, n: usize, sample_rate_hz: f64) -> f64 {
    k as f64 * sample_rate_hz / n as f64
}

/// Indices of local maxima.
///
/// A sample is a peak when it is strictly greater than both neighbours. A flat
/// run of equal samples bounded by strictly lower samples on each side counts
/// as one peak placed at the middle of the run (the left middle for even
/// runs). The first and last samples are never peaks.
pub fn find_peaks(values: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if values.len() < 3 {
        return peaks;
    }

    let last = values.len() - 1;
    let mut i = 1;
    while i < last {
        if values[i - 1] < values[i] {
            let mut ahead = i + 1;
            while ahead < last && values[ahead] == values[i] {
                ahead += 1;
            }
            if values[ahead] < values[i] {
                let right = ahead - 1;
                peaks.push((i + right) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    peaks
}

/// Frequency of the strongest spectral peak, or 0 when the spectrum has none.
pub fn dominant_frequency(series: &[f64], sample_rate_hz: f64) -> f64 {
    let spectrum = magnitude_spectrum(series);
    let peaks = find_peaks(&spectrum);
    strongest_peak(&spectrum, &peaks)
        .map_or(0.0, |k| bin_frequency(k, series.len(), sample_rate_hz))
}

/// Peak index with the largest magnitude normalised by the spectrum maximum.
/// Equal magnitudes resolve to the earliest peak in `peaks`.
pub fn strongest_peak(spectrum: &[f64], peaks: &[usize]) -> Option<usize> {
    let global_max = spectrum.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut best: Option<(usize, f64)> = None;
    for &k in peaks {
        let normalized = spectrum[k] / global_max;
        match best {
            Some((_, current)) if normalized <= current => {}
            _ => best = Some((k, normalized)),
        }
    }
    best.map(|(k, _)| k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, sample_rate: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn spectrum_has_half_plus_one_bins() {
        assert_eq!(magnitude_spectrum(&[1.0; 8]).len(), 5);
        assert_eq!(magnitude_spectrum(&[1.0; 7]).len(), 4);
        assert_eq!(magnitude_spectrum(&[1.0]).len(), 1);
        assert!(magnitude_spectrum(&[]).is_empty());
    }

    #[test]
    fn constant_series_has_only_dc() {
        let spectrum = magnitude_spectrum(&[2.0; 4]);
        assert!((spectrum[0] - 8.0).abs() < 1e-12);
        assert!(spectrum[1..].iter().all(|m| m.abs() < 1e-12));
    }

    #[test]
    fn strict_local_maxima() {
        assert_eq!(find_peaks(&[0.0, 1.0, 0.0, 2.0, 0.0]), vec![1, 3]);
        assert!(find_peaks(&[1.0, 2.0, 3.0, 4.0]).is_empty());
        assert!(find_peaks(&[4.0, 3.0, 2.0]).is_empty());
        assert!(find_peaks(&[1.0, 1.0, 1.0, 1.0]).is_empty());
        assert!(find_peaks(&[0.0, 1.0]).is_empty());
    }

    #[test]
    fn plateau_counts_once_at_its_middle() {
        assert_eq!(find_peaks(&[0.0, 2.0, 2.0, 2.0, 0.0]), vec![2]);
        assert_eq!(find_peaks(&[0.0, 2.0, 2.0, 0.0]), vec![1]);
        // A plateau running into the edge is not a peak.
        assert!(find_peaks(&[0.0, 2.0, 2.0, 2.0]).is_empty());
    }

    #[test]
    fn equal_peaks_resolve_to_the_lower_bin() {
        let spectrum = [9.0, 1.0, 4.0, 1.0, 4.0, 1.0];
        let peaks = find_peaks(&spectrum);
        assert_eq!(peaks, vec![2, 4]);
        assert_eq!(strongest_peak(&spectrum, &peaks), Some(2));
    }

    #[test]
    fn strongest_peak_ignores_the_dc_bin() {
        let spectrum = [9.0, 1.0, 2.0, 1.0, 5.0, 0.0];
        assert_eq!(strongest_peak(&spectrum, &find_peaks(&spectrum)), Some(4));
        assert_eq!(strongest_peak(&spectrum, &[]), None);
    }

    #[test]
    fn resolves_exact_bin_sinusoid() {
        let series = sine(50.0, 1000.0, 1000);
        assert_eq!(dominant_frequency(&series, 1000.0), 50.0);
    }

    #[test]
    fn resolves_nearest_bin_for_off_grid_frequency() {
        let series = sine(52.3, 1000.0, 1000);
        assert_eq!(dominant_frequency(&series, 1000.0), 52.0);
    }

    #[test]
    fn scales_with_sample_rate() {
        let series = sine(100.0, 2000.0, 400);
        assert_eq!(dominant_frequency(&series, 2000.0), 100.0);
    }

    #[test]
    fn monotonic_series_has_no_dominant_frequency() {
        assert_eq!(dominant_frequency(&[1.0, 2.0, 3.0, 4.0, 5.0], 1000.0), 0.0);
        assert_eq!(dominant_frequency(&[5.0], 1000.0), 0.0);
    }
}
