//! Merging and deduplication of per-source result tables.

use std::collections::HashSet;

use crate::models::Paper;

/// Concatenate per-source tables into one, preserving table order and the
/// record order within each table. Empty tables contribute nothing.
#[must_use]
pub fn concat(tables: Vec<Vec<Paper>>) -> Vec<Paper> {
    let mut merged = Vec::with_capacity(tables.iter().map(Vec::len).sum());
    for table in tables {
        merged.extend(table);
    }
    merged
}

/// Remove every record whose exact title already appeared earlier in the
/// table, keeping the first occurrence. Titles are compared byte-exact; no
/// normalization, no cross-field matching.
pub fn dedup_by_title(papers: &mut Vec<Paper>) {
    let mut seen: HashSet<String> = HashSet::with_capacity(papers.len());
    papers.retain(|paper| seen.insert(paper.title.clone()));
}
