use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::model::QualifiedFileSet;
use crate::data::schema::Schema;
use crate::error::QualifyError;

/// File extensions treated as comma-delimited text, compared case-insensitively.
pub const DELIMITED_EXTENSIONS: &[&str] = &["csv"];

// ---------------------------------------------------------------------------
// Single-file qualification
// ---------------------------------------------------------------------------

/// Whether `path` looks like a loadable data file for `schema`.
///
/// Only the header line is read. The file qualifies when its header is
/// non-empty and every header field is a schema column. Any failure to read
/// or parse the header disqualifies the file; nothing is propagated.
pub fn qualify(schema: &Schema, path: &Path) -> bool {
    if !has_delimited_extension(path) {
        return false;
    }

    match read_header(path) {
        Ok(header) => header_matches(schema, &header),
        Err(e) => {
            log::debug!("Disqualified {}: {e}", path.display());
            false
        }
    }
}

fn has_delimited_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            DELIMITED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Read the first record of the file as column names. `csv` stops after the
/// first record, so data rows are never touched.
fn read_header(path: &Path) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?;
    Ok(headers.iter().map(str::to_string).collect())
}

/// Header ⊆ schema, order-independent. An empty header never matches.
fn header_matches(schema: &Schema, header: &[String]) -> bool {
    if header.is_empty() {
        return false;
    }
    let fields: BTreeSet<&str> = header.iter().map(String::as_str).collect();
    fields.iter().all(|field| schema.contains(field))
}

// ---------------------------------------------------------------------------
// Directory filtering
// ---------------------------------------------------------------------------

/// Scan the immediate entries of `dir` and return the qualified ones keyed by
/// file stem.
///
/// Entries are visited in sorted path order, so when two files share a stem
/// the lexicographically last path wins. The result is always a fresh set.
pub fn filter_directory(schema: &Schema, dir: &Path) -> Result<QualifiedFileSet, QualifyError> {
    let entries = fs::read_dir(dir).map_err(|source| QualifyError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => log::warn!("Skipping unreadable entry in {}: {e}", dir.display()),
        }
    }
    paths.sort();

    let mut qualified = QualifiedFileSet::new();
    for path in paths {
        if !path.is_file() || !qualify(schema, &path) {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let absolute = fs::canonicalize(&path).unwrap_or(path);
        if let Some(previous) = qualified.insert(stem.clone(), absolute) {
            log::debug!("Stem '{stem}' also matched {}; keeping the later entry", previous.display());
        }
    }

    log::info!("{} qualified file(s) in {}", qualified.len(), dir.display());
    Ok(qualified)
}

/// A path is a valid browse target when it exists and is not a file.
pub fn is_browsable_dir(path: &Path) -> bool {
    path.exists() && !path.is_file()
}
