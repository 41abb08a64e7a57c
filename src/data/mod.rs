//! Data layer: launch records, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + validate rows → LaunchDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  site + payload predicates, outcome counts
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
