//! Data models for harvested paper records.
//!
//! Every pipeline stage exchanges the same flat [`Paper`] record; absent
//! upstream fields are mapped to empty strings at the source boundary so
//! the export formats never need per-field null handling.

mod paper;

pub use paper::{Paper, Source};
