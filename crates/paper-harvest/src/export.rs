//! Export artifacts: CSV, XLSX, JSON, and the plain-text summary report.
//!
//! One run produces one artifact set, every filename carrying the run-start
//! timestamp so successive runs never collide.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;

use crate::error::ExportResult;
use crate::models::{Paper, Source};

/// Column order shared by the CSV and XLSX artifacts.
const COLUMNS: &[&str] = &["title", "authors", "year", "url", "abstract", "venue", "source"];

/// Filename timestamp format.
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Paths of one run's artifact set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifacts {
    /// Comma-separated values file.
    pub csv: PathBuf,

    /// Binary spreadsheet.
    pub xlsx: PathBuf,

    /// JSON array of record objects.
    pub json: PathBuf,

    /// Plain-text summary report.
    pub summary: PathBuf,
}

/// Writes timestamped artifact sets under one output directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    /// Root output directory.
    out_dir: PathBuf,

    /// Run-start time; stamps every filename and the summary header.
    timestamp: DateTime<Local>,
}

impl Exporter {
    /// Create an exporter rooted at `out_dir`, stamping artifacts with
    /// `run_started_at`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>, run_started_at: DateTime<Local>) -> Self {
        Self { out_dir: out_dir.into(), timestamp: run_started_at }
    }

    /// Create the output root plus the reserved per-source subdirectories.
    ///
    /// The subdirectories are part of the on-disk contract but nothing
    /// writes into them yet; artifacts land at the root.
    pub fn prepare_output_dirs(&self) -> ExportResult<()> {
        fs::create_dir_all(&self.out_dir)?;
        for source in Source::all() {
            fs::create_dir_all(self.out_dir.join(source.dir_name()))?;
        }
        Ok(())
    }

    /// Write the full artifact set for a non-empty table.
    ///
    /// An empty table performs no writes and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error when any artifact cannot be written.
    pub fn export(
        &self,
        papers: &[Paper],
        base_name: &str,
    ) -> ExportResult<Option<ExportArtifacts>> {
        if papers.is_empty() {
            tracing::info!("No results to save");
            return Ok(None);
        }

        self.prepare_output_dirs()?;

        let stem = format!("{base_name}_{}", self.timestamp.format(STAMP_FORMAT));
        let artifacts = ExportArtifacts {
            csv: self.out_dir.join(format!("{stem}.csv")),
            xlsx: self.out_dir.join(format!("{stem}.xlsx")),
            json: self.out_dir.join(format!("{stem}.json")),
            summary: self.out_dir.join(format!("{stem}_summary.txt")),
        };

        write_csv(&artifacts.csv, papers)?;
        write_xlsx(&artifacts.xlsx, papers)?;
        write_json(&artifacts.json, papers)?;
        write_summary(&artifacts.summary, papers, self.timestamp)?;

        tracing::info!(
            records = papers.len(),
            base = %self.out_dir.join(stem).display(),
            "Results saved as CSV, XLSX and JSON with summary"
        );

        Ok(Some(artifacts))
    }
}

/// Write the CSV artifact: UTF-8, header row, one row per record.
fn write_csv(path: &Path, papers: &[Paper]) -> ExportResult<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_path(path)?;
    for paper in papers {
        writer.serialize(paper)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the XLSX artifact: header row plus one row per record, same
/// column order as the CSV.
fn write_xlsx(path: &Path, papers: &[Paper]) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in (0u16..).zip(COLUMNS) {
        sheet.write_string(0, col, *header)?;
    }

    for (row, paper) in (1u32..).zip(papers) {
        sheet.write_string(row, 0, &paper.title)?;
        sheet.write_string(row, 1, &paper.authors)?;
        sheet.write_string(row, 2, &paper.year)?;
        sheet.write_string(row, 3, &paper.url)?;
        sheet.write_string(row, 4, &paper.r#abstract)?;
        sheet.write_string(row, 5, &paper.venue)?;
        sheet.write_string(row, 6, paper.source.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Write the JSON artifact: a 2-space-indented array of record objects.
fn write_json(path: &Path, papers: &[Paper]) -> ExportResult<()> {
    let json = serde_json::to_string_pretty(papers)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the summary report: generation time, total count, per-source
/// breakdown, and the year range.
fn write_summary(
    path: &Path,
    papers: &[Paper],
    generated_at: DateTime<Local>,
) -> ExportResult<()> {
    let mut report = String::new();
    report.push_str("Research Paper Summary\n");
    report.push_str(&format!("Generated on: {}\n\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    report.push_str(&format!("Total papers found: {}\n", papers.len()));
    report.push_str("Papers by source:\n");
    for (source, count) in source_counts(papers) {
        report.push_str(&format!("- {source}: {count}\n"));
    }

    // Years compare lexicographically as stored; empty years sort first.
    let min_year = papers.iter().map(|p| p.year.as_str()).min().unwrap_or_default();
    let max_year = papers.iter().map(|p| p.year.as_str()).max().unwrap_or_default();
    report.push_str(&format!("\nYears covered: {min_year} to {max_year}\n"));

    fs::write(path, report)?;
    Ok(())
}

/// Per-source record counts, descending by count; ties keep encounter order.
fn source_counts(papers: &[Paper]) -> Vec<(Source, usize)> {
    let mut counts: Vec<(Source, usize)> = Vec::new();
    for paper in papers {
        match counts.iter_mut().find(|(source, _)| *source == paper.source) {
            Some((_, count)) => *count += 1,
            None => counts.push((paper.source, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
