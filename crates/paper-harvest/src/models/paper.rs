//! Unified paper record shared by every pipeline stage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which API a record came from.
///
/// Serializes as the display name (`"Semantic Scholar"` / `"arXiv"`) so the
/// exported files carry the human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Semantic Scholar Graph API.
    #[serde(rename = "Semantic Scholar")]
    SemanticScholar,

    /// arXiv Atom API.
    #[serde(rename = "arXiv")]
    Arxiv,
}

impl Source {
    /// Display name, as written into exports and the summary report.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SemanticScholar => "Semantic Scholar",
            Self::Arxiv => "arXiv",
        }
    }

    /// Directory-safe name for the reserved per-source output folders.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::SemanticScholar => "semantic_scholar",
            Self::Arxiv => "arxiv",
        }
    }

    /// All sources the pipeline fetches from, in fetch order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::SemanticScholar, Self::Arxiv]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single harvested paper record.
///
/// All fields are plain strings so the record round-trips through CSV, XLSX
/// and JSON without per-format shims. Field declaration order is the column
/// order in every export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title. Deduplication compares this byte-exact.
    pub title: String,

    /// Author display names joined with ", "; empty when none were listed.
    pub authors: String,

    /// Four-digit publication year, or empty when unknown.
    pub year: String,

    /// Landing-page URL, or empty.
    pub url: String,

    /// Abstract text, or empty.
    pub r#abstract: String,

    /// Publication venue; only the Semantic Scholar source reports one.
    pub venue: String,

    /// Which API produced the record.
    pub source: Source,
}

impl Paper {
    /// True when the record has neither a title nor an abstract, i.e. no
    /// text the relevance filter could match against.
    #[must_use]
    pub fn is_textless(&self) -> bool {
        self.title.is_empty() && self.r#abstract.is_empty()
    }
}
