//! Paper sources.
//!
//! Each remote API is wrapped in a type implementing [`PaperSource`] so the
//! orchestrator can iterate sources uniformly. A fetch never surfaces as
//! `Err`: failures are logged, recorded on the [`FetchOutcome`], and
//! whatever was retrieved before the failure is kept.

mod arxiv;
mod semantic_scholar;

pub use arxiv::ArxivSource;
pub use semantic_scholar::SemanticScholarSource;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::{Paper, Source};

/// Outcome of one source fetch.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Records retrieved before the fetch completed or was cut short.
    pub papers: Vec<Paper>,

    /// The failure that stopped the fetch early, when there was one.
    pub error: Option<SourceError>,
}

impl FetchOutcome {
    /// A fetch that ran to completion.
    #[must_use]
    pub fn complete(papers: Vec<Paper>) -> Self {
        Self { papers, error: None }
    }

    /// A fetch cut short by `error`; keeps everything retrieved so far.
    #[must_use]
    pub fn partial(papers: Vec<Paper>, error: SourceError) -> Self {
        Self { papers, error: Some(error) }
    }

    /// True when the fetch ran to completion.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// A remote API that can be searched for paper metadata.
#[async_trait]
pub trait PaperSource: Send + Sync + std::fmt::Debug {
    /// Which source this is.
    fn source(&self) -> Source;

    /// Display name used in progress output and reports.
    fn name(&self) -> &'static str {
        self.source().as_str()
    }

    /// Fetch up to `max_results` records matching `query`.
    ///
    /// Failures are absorbed into the outcome rather than returned, so a
    /// broken source still contributes its partial results.
    async fn fetch(&self, query: &str, max_results: usize) -> FetchOutcome;
}
