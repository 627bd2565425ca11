use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use super::model::{DataSeries, LoadedData};
use super::schema::Schema;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Reads the schema columns of a comma-delimited data file.
#[derive(Debug, Clone)]
pub struct DataLoader {
    schema: Arc<Schema>,
}

impl DataLoader {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Load every schema column of `path` as `f64` samples.
    ///
    /// Columns outside the schema are ignored. A schema column missing from
    /// the header is a [`LoadError::MissingColumn`]; a cell that does not
    /// parse as a number is a [`LoadError::Parse`] and no data is returned.
    pub fn load(&self, path: &Path) -> Result<LoadedData, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = self.load_reader(file, path)?;
        log::info!(
            "Loaded {} rows x {} columns from {}",
            data.rows(),
            data.len(),
            path.display()
        );
        Ok(data)
    }

    /// Same as [`load`](Self::load) over any reader; `origin` is only used in
    /// error messages.
    pub fn load_reader<R: Read>(&self, reader: R, origin: &Path) -> Result<LoadedData, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let indices: Vec<usize> = self
            .schema
            .columns()
            .iter()
            .map(|col| {
                headers
                    .iter()
                    .position(|h| h == col)
                    .ok_or_else(|| LoadError::MissingColumn {
                        column: col.clone(),
                        path: origin.to_path_buf(),
                    })
            })
            .collect::<Result<_, _>>()?;

        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); indices.len()];

        for (row_no, result) in reader.records().enumerate() {
            let record = result?;
            for (slot, (&idx, col)) in indices.iter().zip(self.schema.columns()).enumerate() {
                let cell = record.get(idx).unwrap_or("");
                let value = parse_float(cell).ok_or_else(|| LoadError::Parse {
                    column: col.clone(),
                    row: row_no + 1,
                    value: cell.to_string(),
                })?;
                columns[slot].push(value);
            }
        }

        Ok(LoadedData::new(
            self.schema
                .columns()
                .iter()
                .cloned()
                .zip(columns.into_iter().map(DataSeries::new))
                .collect(),
        ))
    }
}

fn parse_float(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}
