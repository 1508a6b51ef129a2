//! Pipeline orchestration: fetch, merge, dedup, filter, export.

use chrono::Local;

use crate::config::{Config, api};
use crate::error::SourceError;
use crate::export::{ExportArtifacts, Exporter};
use crate::filter::KeywordFilter;
use crate::merge;
use crate::models::Source;
use crate::sources::{ArxivSource, PaperSource, SemanticScholarSource};

/// Counters and artifacts from one pipeline run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Records fetched per source, in fetch order.
    pub fetched: Vec<(Source, usize)>,

    /// Sources whose fetch was cut short, with the error that stopped them.
    pub failures: Vec<(Source, SourceError)>,

    /// Combined record count before deduplication.
    pub total: usize,

    /// Record count after title deduplication.
    pub unique: usize,

    /// Record count after the relevance filter.
    pub relevant: usize,

    /// Artifact paths; `None` when nothing was exported.
    pub artifacts: Option<ExportArtifacts>,
}

/// Run the full pipeline against both sources.
///
/// Sources are fetched strictly one after the other; progress counts go to
/// stdout at every stage. Fetch failures never fail the run (they are logged
/// and recorded on the report), export failures do.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built, the keyword
/// pattern does not compile, or an artifact cannot be written.
pub async fn run(config: &Config) -> anyhow::Result<RunReport> {
    let started_at = Local::now();

    let client = reqwest::Client::builder()
        .user_agent(api::USER_AGENT)
        .timeout(config.request_timeout)
        .build()?;

    let exporter = Exporter::new(&config.output_dir, started_at);
    exporter.prepare_output_dirs()?;

    let sources: Vec<Box<dyn PaperSource>> = vec![
        Box::new(SemanticScholarSource::new(client.clone(), config)),
        Box::new(ArxivSource::new(client, config)),
    ];

    let mut report = RunReport::default();
    let mut tables = Vec::with_capacity(sources.len());

    for source in &sources {
        let outcome = source.fetch(&config.query, config.max_results).await;
        println!("{} papers found: {}", source.name(), outcome.papers.len());

        report.fetched.push((source.source(), outcome.papers.len()));
        if let Some(error) = outcome.error {
            report.failures.push((source.source(), error));
        }
        tables.push(outcome.papers);
    }

    let mut papers = merge::concat(tables);
    report.total = papers.len();
    println!("Total papers found: {}", report.total);

    if papers.is_empty() {
        println!("No papers found. Check debug logs for details.");
        return Ok(report);
    }

    merge::dedup_by_title(&mut papers);
    report.unique = papers.len();
    println!("Papers after removing duplicates: {}", report.unique);

    let filter = KeywordFilter::new(&config.keywords)?;
    let papers = filter.retain(papers);
    report.relevant = papers.len();
    println!("Relevant papers: {}", report.relevant);

    report.artifacts = exporter.export(&papers, &config.base_filename)?;

    Ok(report)
}
