/// Data layer: sample datasets, filtering, and derived aggregates.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │ samples   │  compiled-in constants → three record tables
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  category predicate → filtered performance records
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  max-by-metric, per-category means, severity counts
///   └──────────┘
/// ```
///
/// Everything here is a pure function over immutable constants; accessors
/// hand out fresh copies, so the layer is trivially reentrant.

pub mod filter;
pub mod model;
pub mod samples;
pub mod stats;
