//! Keyword relevance filter.

use regex::{Regex, RegexBuilder};

use crate::models::Paper;

/// Case-insensitive keyword filter over title and abstract.
///
/// Keywords are escaped and combined into a single alternation, so matching
/// is substring, not whole-word ("AI" also matches inside longer tokens).
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    /// Compiled alternation; `None` when the keyword set is empty, which
    /// retains nothing.
    pattern: Option<Regex>,
}

impl KeywordFilter {
    /// Build a filter from the keyword set.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined pattern fails to compile.
    pub fn new(keywords: &[String]) -> Result<Self, regex::Error> {
        if keywords.is_empty() {
            return Ok(Self { pattern: None });
        }

        let alternation = keywords.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
        let pattern = RegexBuilder::new(&alternation).case_insensitive(true).build()?;
        Ok(Self { pattern: Some(pattern) })
    }

    /// True when the record's title or abstract contains any keyword.
    ///
    /// Records with both fields empty never match, regardless of the
    /// keyword set.
    #[must_use]
    pub fn matches(&self, paper: &Paper) -> bool {
        if paper.is_textless() {
            return false;
        }

        self.pattern
            .as_ref()
            .is_some_and(|re| re.is_match(&paper.title) || re.is_match(&paper.r#abstract))
    }

    /// Retain only matching records, preserving order. An empty table
    /// passes through unchanged.
    #[must_use]
    pub fn retain(&self, papers: Vec<Paper>) -> Vec<Paper> {
        papers.into_iter().filter(|paper| self.matches(paper)).collect()
    }
}
