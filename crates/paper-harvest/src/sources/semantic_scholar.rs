//! Semantic Scholar Graph API source.
//!
//! Pages through `/graph/v1/paper/search` in fixed 20-record steps with a
//! politeness delay between pages. A short page means the result set is
//! exhausted; any failure stops the walk and keeps the records already
//! retrieved.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, api};
use crate::error::{SourceError, SourceResult};
use crate::models::{Paper, Source};

use super::{FetchOutcome, PaperSource};

/// Paged client for the Graph API paper search endpoint.
#[derive(Debug, Clone)]
pub struct SemanticScholarSource {
    /// Shared HTTP client.
    client: Client,

    /// Fully resolved search endpoint URL.
    search_url: String,

    /// Delay between successive pages.
    page_delay: Duration,
}

impl SemanticScholarSource {
    /// Create a source from the shared HTTP client and configuration.
    #[must_use]
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            search_url: format!(
                "{}{}",
                config.semantic_scholar_url,
                api::SEMANTIC_SCHOLAR_SEARCH_PATH
            ),
            page_delay: config.page_delay,
        }
    }

    /// Fetch the page starting at `offset`.
    async fn fetch_page(&self, query: &str, offset: usize) -> SourceResult<Vec<Paper>> {
        let params = [
            ("query", query.to_string()),
            ("limit", api::PAGE_SIZE.to_string()),
            ("offset", offset.to_string()),
            ("fields", api::SEMANTIC_SCHOLAR_FIELDS.to_string()),
        ];

        let response = self.client.get(&self.search_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SourceError::status(status.as_u16(), text));
        }

        let body = response.text().await?;
        let page: SearchResponse = serde_json::from_str(&body)?;
        Ok(page.data.into_iter().map(ApiPaper::into_record).collect())
    }
}

#[async_trait]
impl PaperSource for SemanticScholarSource {
    fn source(&self) -> Source {
        Source::SemanticScholar
    }

    async fn fetch(&self, query: &str, max_results: usize) -> FetchOutcome {
        let mut papers = Vec::new();
        let mut offset = 0;

        while offset < max_results {
            tracing::debug!(offset, "Requesting Semantic Scholar page");

            let page = match self.fetch_page(query, offset).await {
                Ok(page) => page,
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        offset,
                        retrieved = papers.len(),
                        "Semantic Scholar fetch stopped early"
                    );
                    return FetchOutcome::partial(papers, err);
                }
            };

            let page_len = page.len();
            papers.extend(page);

            // A short page means the result set is exhausted.
            if page_len < api::PAGE_SIZE {
                break;
            }

            offset += api::PAGE_SIZE;
            if offset < max_results {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        tracing::debug!(retrieved = papers.len(), "Semantic Scholar fetch complete");
        FetchOutcome::complete(papers)
    }
}

/// One page of the Graph API search response.
#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    /// Papers in this page.
    #[serde(default)]
    data: Vec<ApiPaper>,
}

/// A paper as the Graph API reports it; every field may be absent.
#[derive(Debug, Default, Deserialize)]
struct ApiPaper {
    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    authors: Vec<ApiAuthor>,

    #[serde(default)]
    year: Option<i32>,

    #[serde(default)]
    url: Option<String>,

    #[serde(default)]
    r#abstract: Option<String>,

    #[serde(default)]
    venue: Option<String>,
}

/// Author entry inside a wire paper.
#[derive(Debug, Default, Deserialize)]
struct ApiAuthor {
    #[serde(default)]
    name: Option<String>,
}

impl ApiPaper {
    /// Map the wire record onto the unified schema, defaulting every absent
    /// field to an empty string.
    fn into_record(self) -> Paper {
        Paper {
            title: self.title.unwrap_or_default(),
            authors: self
                .authors
                .iter()
                .filter_map(|a| a.name.as_deref())
                .collect::<Vec<_>>()
                .join(", "),
            year: self.year.map(|y| y.to_string()).unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            r#abstract: self.r#abstract.unwrap_or_default(),
            venue: self.venue.unwrap_or_default(),
            source: Source::SemanticScholar,
        }
    }
}
