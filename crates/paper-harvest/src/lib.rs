//! Multi-Source Academic Paper Harvester
//!
//! Collects paper metadata from Semantic Scholar and arXiv for a single
//! search query, merges and deduplicates the results, filters them against a
//! configured keyword list, and writes CSV, XLSX and JSON artifacts plus a
//! plain-text summary.
//!
//! # Features
//!
//! - **Two sources**: Semantic Scholar Graph API (paged) and the arXiv Atom API
//! - **Fault-tolerant**: A failing source never aborts the run; partial results are kept
//! - **Async-first**: Built on Tokio with a polite inter-page delay
//! - **Four artifacts**: Timestamped CSV, XLSX, JSON and summary per run
//!
//! # Example
//!
//! ```no_run
//! use paper_harvest::{config::Config, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new();
//!     let report = pipeline::run(&config).await?;
//!
//!     println!("{} relevant papers", report.relevant);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod merge;
pub mod models;
pub mod pipeline;
pub mod sources;

pub use config::Config;
pub use error::{ExportError, SourceError};
pub use models::{Paper, Source};
pub use pipeline::RunReport;
