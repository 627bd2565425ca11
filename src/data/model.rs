use std::collections::BTreeMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// DataSeries – one numeric column of a loaded file
// ---------------------------------------------------------------------------

/// An immutable run of samples extracted from one column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSeries {
    values: Vec<f64>,
}

impl DataSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The visible window `range` of the series, clamped to its bounds.
    /// An inverted or out-of-bounds range yields an empty slice.
    pub fn window(&self, range: Range<usize>) -> &[f64] {
        let end = range.end.min(self.values.len());
        let start = range.start.min(end);
        &self.values[start..end]
    }
}

impl From<Vec<f64>> for DataSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

// ---------------------------------------------------------------------------
// LoadedData – the schema columns of one file
// ---------------------------------------------------------------------------

/// Columns of one loaded file, in schema order.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    columns: Vec<(String, DataSeries)>,
}

impl LoadedData {
    pub fn new(columns: Vec<(String, DataSeries)>) -> Self {
        Self { columns }
    }

    pub fn get(&self, name: &str) -> Option<&DataSeries> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, series)| series)
    }

    /// First schema column (voltage by convention).
    pub fn primary(&self) -> Option<&DataSeries> {
        self.columns.first().map(|(_, series)| series)
    }

    /// Second schema column (current by convention).
    pub fn secondary(&self) -> Option<&DataSeries> {
        self.columns.get(1).map(|(_, series)| series)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(col, _)| col.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataSeries)> {
        self.columns.iter().map(|(col, series)| (col.as_str(), series))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of data rows (every column has the same length).
    pub fn rows(&self) -> usize {
        self.primary().map_or(0, DataSeries::len)
    }

    pub fn into_columns(self) -> Vec<(String, DataSeries)> {
        self.columns
    }
}

// ---------------------------------------------------------------------------
// QualifiedFileSet – stem → path for one directory scan
// ---------------------------------------------------------------------------

/// The files of one directory that passed qualification, keyed by stem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifiedFileSet {
    files: BTreeMap<String, PathBuf>,
}

impl QualifiedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file; an existing entry with the same stem is replaced.
    pub(crate) fn insert(&mut self, name: String, path: PathBuf) -> Option<PathBuf> {
        self.files.insert(name, path)
    }

    /// Display names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Resolve a display name back to its absolute path.
    pub fn path_of(&self, name: &str) -> Option<&Path> {
        self.files.get(name).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.files
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
