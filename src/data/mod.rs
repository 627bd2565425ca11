/// Data layer: column schema, file qualification, and loading.
///
/// Architecture:
/// ```text
///   data/KEYS.csv
///        │
///        ▼
///   ┌──────────┐
///   │  schema   │  header row → Schema (ordered column names)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ qualify   │  directory → QualifiedFileSet (stem → path), header only
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  chosen file → LoadedData (schema column → DataSeries)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod qualify;
pub mod schema;

pub use loader::DataLoader;
pub use model::{DataSeries, LoadedData, QualifiedFileSet};
pub use qualify::{filter_directory, is_browsable_dir, qualify};
pub use schema::Schema;
