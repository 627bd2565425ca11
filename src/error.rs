use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the column schema resource. All of them are fatal:
/// there is no fallback schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("reading schema resource {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing schema header")]
    Csv(#[from] csv::Error),
    #[error("schema header is empty or has a blank column name")]
    Empty,
    #[error("schema column '{0}' appears more than once")]
    Duplicate(String),
}

/// Only failing to list the directory itself is reported; bad entries are
/// skipped.
#[derive(Debug, Error)]
pub enum QualifyError {
    #[error("reading directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading CSV data")]
    Csv(#[from] csv::Error),
    #[error("column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config JSON")]
    Json(#[from] serde_json::Error),
    #[error("sample rate must be a positive finite number, got {0}")]
    InvalidSampleRate(f64),
}

/// Crate-level error for callers that drive several layers at once.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Qualify(#[from] QualifyError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no qualified file named '{0}'")]
    UnknownFile(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
