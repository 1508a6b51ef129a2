//! Configuration for the paper harvest pipeline.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the Semantic Scholar API.
    pub const SEMANTIC_SCHOLAR_URL: &str = "https://api.semanticscholar.org";

    /// Relative path of the Graph API paper search endpoint.
    pub const SEMANTIC_SCHOLAR_SEARCH_PATH: &str = "/graph/v1/paper/search";

    /// Base URL for the arXiv API.
    pub const ARXIV_URL: &str = "https://export.arxiv.org";

    /// Relative path of the arXiv query endpoint.
    pub const ARXIV_QUERY_PATH: &str = "/api/query";

    /// Fields requested from the Graph API per paper.
    pub const SEMANTIC_SCHOLAR_FIELDS: &str = "title,authors,year,url,abstract,venue";

    /// Records per Semantic Scholar page.
    pub const PAGE_SIZE: usize = 20;

    /// Politeness delay between successive Semantic Scholar pages.
    pub const PAGE_DELAY: Duration = Duration::from_secs(1);

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// User agent sent with every request, with a contact per API etiquette.
    pub const USER_AGENT: &str =
        concat!("paper-harvest/", env!("CARGO_PKG_VERSION"), " (mailto:research@example.org)");
}

/// Embedded research profile used when the CLI overrides nothing.
pub mod defaults {
    /// Search query sent to both APIs.
    pub const QUERY: &str =
        "blockchain artificial intelligence smart contracts autonomous systems";

    /// Relevance keywords matched against title and abstract.
    pub const KEYWORDS: &[&str] =
        &["blockchain", "artificial intelligence", "AI", "smart contracts", "autonomous systems"];

    /// Per-source cap on retrieved records.
    pub const MAX_RESULTS: usize = 100;

    /// Root directory for export artifacts.
    pub const OUTPUT_DIR: &str = "research_papers";

    /// Base name every artifact filename starts with.
    pub const BASE_FILENAME: &str = "blockchain_ai_research";
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search query sent to both APIs.
    pub query: String,

    /// Relevance keywords; a record survives the filter when its title or
    /// abstract contains any of them, case-insensitively.
    pub keywords: Vec<String>,

    /// Per-source cap on retrieved records.
    pub max_results: usize,

    /// Root directory for export artifacts.
    pub output_dir: PathBuf,

    /// Base name every artifact filename starts with.
    pub base_filename: String,

    /// Base URL for the Semantic Scholar API (for testing with mock servers).
    pub semantic_scholar_url: String,

    /// Base URL for the arXiv API (for testing with mock servers).
    pub arxiv_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Delay between successive Semantic Scholar pages.
    pub page_delay: Duration,
}

impl Config {
    /// Create a configuration carrying the embedded research profile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: defaults::QUERY.to_string(),
            keywords: defaults::KEYWORDS.iter().map(ToString::to_string).collect(),
            max_results: defaults::MAX_RESULTS,
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            base_filename: defaults::BASE_FILENAME.to_string(),
            semantic_scholar_url: api::SEMANTIC_SCHOLAR_URL.to_string(),
            arxiv_url: api::ARXIV_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            page_delay: api::PAGE_DELAY,
        }
    }

    /// Create a test configuration pointing both APIs at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            semantic_scholar_url: base_url.to_string(),
            arxiv_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            page_delay: Duration::ZERO, // No delay in tests
            ..Self::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_profile() {
        let config = Config::default();
        assert_eq!(config.max_results, 100);
        assert_eq!(config.output_dir, PathBuf::from("research_papers"));
        assert!(config.keywords.iter().any(|k| k == "blockchain"));
        assert_eq!(config.page_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.semantic_scholar_url, "http://127.0.0.1:9999");
        assert_eq!(config.arxiv_url, "http://127.0.0.1:9999");
        assert_eq!(config.page_delay, Duration::ZERO);
        // The research profile itself is unchanged.
        assert_eq!(config.query, defaults::QUERY);
    }
}
