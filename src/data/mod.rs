//! Data layer: parsing, extraction, merging and filtering.
//!
//! Architecture:
//! ```text
//!  Discovery.csv  Colgan.csv  KJH.csv
//!        │            │          │
//!        ▼            ▼          ▼
//!   ┌──────────┐
//!   │  parser   │  text → rows (+ row issues)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ extract   │  rows → Series ("YYYY-M" labels, one numeric column)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  merge    │  N aligned series → MergedView (+ derived total)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  year selection → FilteredView
//!   └──────────┘
//! ```

pub mod error;
pub mod extract;
pub mod filter;
pub mod loader;
pub mod merge;
pub mod model;
pub mod parser;
