use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::SchemaError;

/// Default location of the schema resource, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "data/KEYS.csv";

/// Ordered column names a data file may carry.
///
/// Index 0 is the primary signal (voltage), index 1 the secondary signal
/// (current). Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Build a schema from column names. Rejects an empty list, blank names
    /// and repeated names.
    pub fn new<I, S>(columns: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() || columns.iter().any(|c| c.is_empty()) {
            return Err(SchemaError::Empty);
        }
        let mut seen = BTreeSet::new();
        for col in &columns {
            if !seen.insert(col.as_str()) {
                return Err(SchemaError::Duplicate(col.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Read the schema resource: a CSV file whose header row lists the columns.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let file = File::open(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema = Self::from_reader(file)?;
        log::info!("Loaded schema {:?} from {}", schema.columns, path.display());
        Ok(schema)
    }

    /// Parse the header row of any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SchemaError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = reader.headers()?;
        Self::new(headers.iter())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn primary(&self) -> &str {
        &self.columns[0]
    }

    pub fn secondary(&self) -> Option<&str> {
        self.columns.get(1).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
