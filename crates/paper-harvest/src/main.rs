//! Multi-Source Academic Paper Harvester - Entry Point
//!
//! Running without arguments reproduces the embedded research profile;
//! every knob can be overridden on the command line.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use paper_harvest::{config::Config, pipeline};

#[derive(Parser, Debug)]
#[command(name = "paper-harvest")]
#[command(about = "Collect academic papers from Semantic Scholar and arXiv")]
#[command(version)]
struct Cli {
    /// Search query sent to both sources
    #[arg(long)]
    query: Option<String>,

    /// Relevance keyword, repeatable; matched against title and abstract
    #[arg(long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Per-source cap on fetched records
    #[arg(long)]
    max_results: Option<usize>,

    /// Directory the artifacts are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Stem of the timestamped artifact filenames
    #[arg(long)]
    base_name: Option<String>,

    /// Shortcut for --log-level debug
    #[arg(long)]
    debug: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { cli.log_level.as_str() };
    init_tracing(log_level, cli.json_logs);

    let mut config = Config::new();
    if let Some(query) = cli.query {
        config.query = query;
    }
    if !cli.keywords.is_empty() {
        config.keywords = cli.keywords;
    }
    if let Some(max_results) = cli.max_results {
        config.max_results = max_results;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(base_name) = cli.base_name {
        config.base_filename = base_name;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        query = %config.query,
        max_results = config.max_results,
        "Starting paper harvest"
    );

    pipeline::run(&config).await?;

    Ok(())
}
