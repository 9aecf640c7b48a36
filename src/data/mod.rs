/// Data layer: canonical claim records, header mapping, filtering.
///
/// Architecture:
/// ```text
///  .csv / .json export
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read sheet → RawTable (headers + raw rows)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ header_map  │  header string → Field (declarative table)
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ normalizer  │  raw rows → Vec<CanonicalRecord>
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (record, FilterState) → visible?
///   └──────────┘
/// ```
///
/// `vocabulary` and `columns` are the static catalogs behind the filter
/// dropdowns and the table layout; `config` validates them at startup.

pub mod columns;
pub mod config;
pub mod filter;
pub mod header_map;
pub mod loader;
pub mod model;
pub mod normalizer;
pub mod vocabulary;
