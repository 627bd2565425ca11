use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::data::{filter_directory, DataLoader, DataSeries, QualifiedFileSet, Schema};
use crate::error::{Error, Result};
use crate::stats::{StatRecord, StatisticsEngine};

/// Series shown before any file has been loaded.
pub const PLACEHOLDER_SERIES: [f64; 2] = [0.0, 1.0];

// ---------------------------------------------------------------------------
// Per-signal view state
// ---------------------------------------------------------------------------

/// Which of the two displayed signals an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// First schema column (voltage).
    Primary,
    /// Second schema column (current).
    Secondary,
}

/// Raw samples of one signal plus the statistics currently shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalStats {
    pub column: String,
    pub unit: String,
    pub series: DataSeries,
    pub stats: Vec<StatRecord>,
    /// Visible index window the statistics were computed over, if narrowed.
    pub view_range: Option<Range<usize>>,
}

impl SignalStats {
    fn compute(
        engine: &StatisticsEngine,
        column: &str,
        unit: &str,
        series: DataSeries,
    ) -> Self {
        let stats = engine.compute(series.values(), unit);
        Self {
            column: column.to_string(),
            unit: unit.to_string(),
            series,
            stats,
            view_range: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Analyzer state
// ---------------------------------------------------------------------------

/// Everything a front-end needs between user actions: the current directory
/// scan, the loaded signals and their statistics.
pub struct AnalyzerState {
    schema: Arc<Schema>,
    config: AnalyzerConfig,
    loader: DataLoader,
    engine: StatisticsEngine,

    /// Result of the last directory scan.
    files: QualifiedFileSet,

    /// Directory of the last successfully opened file.
    active_dir: Option<PathBuf>,

    primary: SignalStats,
    secondary: Option<SignalStats>,
}

impl AnalyzerState {
    /// Both signals start out showing [`PLACEHOLDER_SERIES`].
    pub fn new(schema: Arc<Schema>, config: AnalyzerConfig) -> Self {
        let engine = StatisticsEngine::new(config.sample_rate_hz);
        let placeholder = DataSeries::new(PLACEHOLDER_SERIES.to_vec());

        let primary = SignalStats::compute(
            &engine,
            schema.primary(),
            &config.primary_unit,
            placeholder.clone(),
        );
        let secondary = schema.secondary().map(|col| {
            SignalStats::compute(&engine, col, &config.secondary_unit, placeholder)
        });

        Self {
            loader: DataLoader::new(Arc::clone(&schema)),
            schema,
            config,
            engine,
            files: QualifiedFileSet::new(),
            active_dir: None,
            primary,
            secondary,
        }
    }

    /// Rescan `dir` and replace the file list with the result.
    pub fn browse(&mut self, dir: &Path) -> Result<&QualifiedFileSet> {
        self.files = filter_directory(&self.schema, dir)?;
        Ok(&self.files)
    }

    /// Load `path` and recompute both signals.
    ///
    /// Returns `Ok(false)` without touching any state when `path` is not an
    /// existing file. Load failures propagate and also leave state untouched.
    pub fn open(&mut self, path: &Path) -> Result<bool> {
        if !path.is_file() {
            log::debug!("Ignoring selection {}: not a file", path.display());
            return Ok(false);
        }

        let data = self.loader.load(path)?;
        let mut columns = data.into_columns().into_iter();

        if let Some((col, series)) = columns.next() {
            self.primary =
                SignalStats::compute(&self.engine, &col, &self.config.primary_unit, series);
        }
        if let Some((col, series)) = columns.next() {
            self.secondary = Some(SignalStats::compute(
                &self.engine,
                &col,
                &self.config.secondary_unit,
                series,
            ));
        }

        self.active_dir = path.parent().map(Path::to_path_buf);
        log::info!("Opened {}", path.display());
        Ok(true)
    }

    /// Open a file from the last directory scan by its display name.
    pub fn open_by_name(&mut self, name: &str) -> Result<bool> {
        let path = self
            .files
            .path_of(name)
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::UnknownFile(name.to_string()))?;
        self.open(&path)
    }

    /// Recompute one signal's statistics over the visible index window.
    /// `None` restores the full-series statistics.
    pub fn set_view_range(&mut self, signal: Signal, range: Option<Range<usize>>) {
        let engine = self.engine;
        let Some(target) = self.signal_mut(signal) else {
            return;
        };
        target.stats = match &range {
            Some(r) => engine.compute_window(target.series.values(), r.clone(), &target.unit),
            None => engine.compute(target.series.values(), &target.unit),
        };
        target.view_range = range;
    }

    fn signal_mut(&mut self, signal: Signal) -> Option<&mut SignalStats> {
        match signal {
            Signal::Primary => Some(&mut self.primary),
            Signal::Secondary => self.secondary.as_mut(),
        }
    }

    pub fn signal(&self, signal: Signal) -> Option<&SignalStats> {
        match signal {
            Signal::Primary => Some(&self.primary),
            Signal::Secondary => self.secondary.as_ref(),
        }
    }

    pub fn primary(&self) -> &SignalStats {
        &self.primary
    }

    pub fn secondary(&self) -> Option<&SignalStats> {
        self.secondary.as_ref()
    }

    pub fn files(&self) -> &QualifiedFileSet {
        &self.files
    }

    pub fn active_dir(&self) -> Option<&Path> {
        self.active_dir.as_deref()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
