mod common;

use std::f64::consts::PI;

use common::{capture, schema, ScratchDir};
use voltscope::data::DataLoader;
use voltscope::error::{Error, LoadError};
use voltscope::stats::record::{find, DOMINANT_FREQ, MAX_PEAK, MIN_PEAK};
use voltscope::{AnalyzerConfig, AnalyzerState, Signal};

fn sine_capture(freq_hz: f64, n: usize) -> String {
    let rows: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let t = i as f64 / 1000.0;
            ((2.0 * PI * freq_hz * t).sin(), 0.25 * (2.0 * PI * 2.0 * freq_hz * t).sin())
        })
        .collect();
    capture(&rows)
}

#[test]
fn browse_then_open_by_name() {
    let dir = ScratchDir::new("session");
    dir.write("tone.csv", &sine_capture(50.0, 1000));
    dir.write("notes.txt", "voltage,current\n");

    let mut state = AnalyzerState::new(schema(), AnalyzerConfig::default());
    let names: Vec<String> = state
        .browse(dir.path())
        .unwrap()
        .names()
        .map(str::to_string)
        .collect();
    assert_eq!(names, ["tone"]);

    assert!(state.open_by_name("tone").unwrap());
    assert_eq!(state.primary().series.len(), 1000);
    assert_eq!(state.primary().column, "voltage");

    let voltage = &state.primary().stats;
    assert_eq!(find(voltage, DOMINANT_FREQ).unwrap().value, 50.0);
    assert_eq!(voltage[0].unit, "V");

    let current = &state.secondary().unwrap().stats;
    assert_eq!(find(current, DOMINANT_FREQ).unwrap().value, 100.0);
    assert_eq!(current[0].unit, "A");
    assert_eq!(current[5].unit, "Hz");

    let active = state.active_dir().unwrap().canonicalize().unwrap();
    assert_eq!(active, dir.path().canonicalize().unwrap());
}

#[test]
fn sample_rate_comes_from_config() {
    let dir = ScratchDir::new("rate");
    let path = dir.write("tone.csv", &sine_capture(50.0, 1000));

    let config = AnalyzerConfig {
        sample_rate_hz: 2000.0,
        ..AnalyzerConfig::default()
    };
    let mut state = AnalyzerState::new(schema(), config);
    assert!(state.open(&path).unwrap());
    // Same samples labelled at twice the rate read as twice the frequency.
    assert_eq!(find(&state.primary().stats, DOMINANT_FREQ).unwrap().value, 100.0);
}

#[test]
fn view_range_recomputes_over_the_window() {
    let dir = ScratchDir::new("window");
    let path = dir.write(
        "steps.csv",
        &capture(&[(0.0, 0.0), (5.0, 1.0), (6.0, 2.0), (7.0, 3.0), (-9.0, 4.0)]),
    );

    let mut state = AnalyzerState::new(schema(), AnalyzerConfig::default());
    assert!(state.open(&path).unwrap());
    assert_eq!(find(&state.primary().stats, MIN_PEAK).unwrap().value, -9.0);

    state.set_view_range(Signal::Primary, Some(1..4));
    assert_eq!(find(&state.primary().stats, MIN_PEAK).unwrap().value, 5.0);
    assert_eq!(find(&state.primary().stats, MAX_PEAK).unwrap().value, 7.0);
    // The other signal is untouched.
    assert_eq!(find(&state.secondary().unwrap().stats, MAX_PEAK).unwrap().value, 4.0);
}

#[test]
fn parse_failure_propagates_and_keeps_previous_data() {
    let dir = ScratchDir::new("parse");
    let good = dir.write("good.csv", &capture(&[(1.0, 2.0), (3.0, 4.0)]));
    let bad = dir.write("bad.csv", "voltage,current\n1,2\nx,4\n");

    let mut state = AnalyzerState::new(schema(), AnalyzerConfig::default());
    assert!(state.open(&good).unwrap());

    let err = state.open(&bad).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Parse { .. })));
    assert_eq!(state.primary().series.values(), &[1.0, 3.0]);
}

#[test]
fn qualified_but_incomplete_file_reports_missing_column() {
    let dir = ScratchDir::new("missing");
    let path = dir.write("voltage_only.csv", "voltage\n1\n2\n");

    let err = DataLoader::new(schema()).load(&path).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "current"));
}

#[test]
fn directory_selection_is_a_silent_no_op() {
    let dir = ScratchDir::new("noop");
    let mut state = AnalyzerState::new(schema(), AnalyzerConfig::default());
    assert!(!state.open(dir.path()).unwrap());
    assert!(state.active_dir().is_none());
}
