/// Data layer: core types, parsing, interpolation, and export.
///
/// Architecture:
/// ```text
///  <ALG>_<dataset>_pr.txt
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  "Precision: […]" / "Recall: […]" → ResultSeries
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  interp   │  max precision at recall ≥ t, t = 0.0..=1.0 → InterpolatedCurve
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter   │   │  export   │  curves → CSV
///   └──────────┘   └──────────┘
///   visibility + z-order → draw order
/// ```

pub mod export;
pub mod filter;
pub mod interp;
pub mod model;
pub mod parser;
