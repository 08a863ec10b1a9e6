/// Data layer: table types, file loading, and the dataset catalog.
///
/// Architecture:
/// ```text
///  data dir ──► catalog   list pre-packaged datasets
///                  │
///                  ▼
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalesTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ SalesTable │  Vec<Record>, trimmed column names
///   └────────────┘
/// ```

pub mod catalog;
pub mod loader;
pub mod model;
