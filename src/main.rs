use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use voltscope::data::{qualify, Schema};
use voltscope::report::{render_file_list, render_table};
use voltscope::stats::StatRecord;
use voltscope::{AnalyzerConfig, AnalyzerState};

#[derive(Parser)]
#[command(name = "voltscope")]
#[command(version, about = "Voltage/current capture analyzer", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schema resource (CSV header listing the expected columns)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Sample rate of the captures in Hz
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Emit JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the qualified data files of a directory
    List {
        dir: PathBuf,
    },

    /// Load a data file and print per-signal statistics
    Stats {
        file: PathBuf,

        /// Visible index window, e.g. 100..600
        #[arg(long, value_parser = parse_range)]
        range: Option<Range<usize>>,
    },

    /// Report whether a file qualifies against the schema
    Check {
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct SignalReport<'a> {
    column: &'a str,
    samples: usize,
    stats: &'a [StatRecord],
}

fn parse_range(s: &str) -> Result<Range<usize>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{s}'"))?;
    let start: usize = start.trim().parse().map_err(|e| format!("start: {e}"))?;
    let end: usize = end.trim().parse().map_err(|e| format!("end: {e}"))?;
    if start >= end {
        return Err(format!("empty range {start}..{end}"));
    }
    Ok(start..end)
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(schema) = &cli.schema {
        config.schema_path = schema.clone();
    }
    if let Some(rate) = cli.sample_rate {
        config.sample_rate_hz = rate;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let schema = Schema::from_path(&config.schema_path)
        .with_context(|| format!("loading schema {}", config.schema_path.display()))?;
    let schema = Arc::new(schema);

    match &cli.command {
        Commands::List { dir } => list(schema, config, dir, cli.json),
        Commands::Stats { file, range } => stats(schema, config, file, range.clone(), cli.json),
        Commands::Check { file } => {
            let ok = qualify(&schema, file);
            println!("{}: {}", file.display(), if ok { "qualified" } else { "not qualified" });
            Ok(())
        }
    }
}

fn list(schema: Arc<Schema>, config: AnalyzerConfig, dir: &Path, json: bool) -> Result<()> {
    let mut state = AnalyzerState::new(schema, config);
    let files = state
        .browse(dir)
        .with_context(|| format!("scanning {}", dir.display()))?;

    if json {
        let map: Vec<(&str, String)> = files
            .iter()
            .map(|(name, path)| (name, path.display().to_string()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        print!("{}", render_file_list(files));
    }
    Ok(())
}

fn stats(
    schema: Arc<Schema>,
    config: AnalyzerConfig,
    file: &Path,
    range: Option<Range<usize>>,
    json: bool,
) -> Result<()> {
    let mut state = AnalyzerState::new(schema, config);
    if !state
        .open(file)
        .with_context(|| format!("loading {}", file.display()))?
    {
        bail!("{} is not a file", file.display());
    }

    if range.is_some() {
        state.set_view_range(voltscope::Signal::Primary, range.clone());
        state.set_view_range(voltscope::Signal::Secondary, range);
    }

    let signals: Vec<_> = std::iter::once(state.primary())
        .chain(state.secondary())
        .collect();

    if json {
        let reports: Vec<SignalReport> = signals
            .iter()
            .map(|s| SignalReport {
                column: &s.column,
                samples: s.series.len(),
                stats: &s.stats,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for signal in signals {
            let title = format!("{} ({} samples)", signal.column, signal.series.len());
            print!("{}", render_table(&title, &signal.stats));
        }
    }
    Ok(())
}
