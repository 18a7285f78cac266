//! `cg-ingest`: facility CSV loading and region-name normalization.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`loader`]  | `load_facilities_csv`, `load_facilities_reader`, `RecordLayout`, `IngestReport` |
//! | [`region`]  | `normalize_region`                                          |
//! | [`error`]   | `IngestError`, `IngestResult<T>`                            |

pub mod error;
pub mod loader;
pub mod region;


pub use error::{IngestError, IngestResult};
pub use loader::{IngestReport, RecordLayout, load_facilities_csv, load_facilities_reader};
pub use region::normalize_region;
