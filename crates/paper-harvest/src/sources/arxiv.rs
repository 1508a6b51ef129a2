//! arXiv Atom API source.
//!
//! One GET against `/api/query`, newest-updated first, parsed from the Atom
//! feed. arXiv wraps long titles and abstracts across lines, so both are
//! whitespace-normalized before they enter the record table.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, api};
use crate::error::{SourceError, SourceResult};
use crate::models::{Paper, Source};

use super::{FetchOutcome, PaperSource};

const SORT_BY: &str = "lastUpdatedDate";
const SORT_ORDER: &str = "descending";

/// Link type of the human-readable abstract page in an Atom entry.
const HTML_LINK_TYPE: &str = "text/html";

/// Single-request client for the arXiv query endpoint.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    /// Shared HTTP client.
    client: Client,

    /// Fully resolved query endpoint URL.
    query_url: String,
}

impl ArxivSource {
    /// Create a source from the shared HTTP client and configuration.
    #[must_use]
    pub fn new(client: Client, config: &Config) -> Self {
        Self { client, query_url: format!("{}{}", config.arxiv_url, api::ARXIV_QUERY_PATH) }
    }

    /// Fetch and parse the feed.
    async fn fetch_feed(&self, query: &str, max_results: usize) -> SourceResult<Vec<Paper>> {
        let params = [
            ("search_query", format!("all:{query}")),
            ("start", "0".to_string()),
            ("max_results", max_results.to_string()),
            ("sortBy", SORT_BY.to_string()),
            ("sortOrder", SORT_ORDER.to_string()),
        ];

        let response = self.client.get(&self.query_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SourceError::status(status.as_u16(), text));
        }

        let body = response.text().await?;
        let feed: Feed = quick_xml::de::from_str(&body)?;
        Ok(feed.entries.into_iter().map(Entry::into_record).collect())
    }
}

#[async_trait]
impl PaperSource for ArxivSource {
    fn source(&self) -> Source {
        Source::Arxiv
    }

    async fn fetch(&self, query: &str, max_results: usize) -> FetchOutcome {
        match self.fetch_feed(query, max_results).await {
            Ok(papers) => {
                tracing::debug!(retrieved = papers.len(), "arXiv fetch complete");
                FetchOutcome::complete(papers)
            }
            Err(err) => {
                tracing::warn!(error = %err, "arXiv fetch failed");
                FetchOutcome::partial(Vec::new(), err)
            }
        }
    }
}

/// Atom feed envelope; everything but the entries is ignored.
#[derive(Debug, Default, Deserialize)]
struct Feed {
    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

/// One Atom entry as arXiv reports it.
#[derive(Debug, Default, Deserialize)]
struct Entry {
    #[serde(default)]
    title: String,

    #[serde(default, rename = "author")]
    authors: Vec<AtomAuthor>,

    /// RFC 3339 submission timestamp; the year is its first four characters.
    #[serde(default)]
    published: String,

    #[serde(default, rename = "link")]
    links: Vec<AtomLink>,

    #[serde(default)]
    summary: String,
}

/// `<author><name>...</name></author>` element.
#[derive(Debug, Default, Deserialize)]
struct AtomAuthor {
    #[serde(default)]
    name: String,
}

/// `<link href=".." type=".."/>` element; attributes only.
#[derive(Debug, Default, Deserialize)]
struct AtomLink {
    #[serde(default, rename = "@href")]
    href: String,

    #[serde(default, rename = "@type")]
    link_type: String,
}

impl Entry {
    /// Map the Atom entry onto the unified schema.
    fn into_record(self) -> Paper {
        let url = self
            .links
            .iter()
            .find(|link| link.link_type == HTML_LINK_TYPE)
            .map(|link| link.href.clone())
            .unwrap_or_default();

        Paper {
            title: normalize_whitespace(&self.title),
            authors: self
                .authors
                .iter()
                .map(|author| author.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            year: self.published.get(..4).unwrap_or_default().to_string(),
            url,
            r#abstract: normalize_whitespace(&self.summary),
            venue: String::new(),
            source: Source::Arxiv,
        }
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
