//! Scholar Digest - Entry Point
//!
//! Reads an author list, looks every author up, and writes the digest report.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_digest::{
    AggregationEngine, OfflineSource, ProfileSource, RecencyWindow, SemanticScholarClient,
    config::Config,
    formatters,
    io::{ReportWriter, read_authors},
    models::OutputFormat,
};

#[derive(Parser, Debug)]
#[command(name = "scholar-digest")]
#[command(about = "Citation, venue and collaboration digest for a list of researchers")]
#[command(version)]
struct Cli {
    /// Author list, one name per line
    #[arg(long, short, default_value = "authors.txt")]
    authors: PathBuf,

    /// Report destination
    #[arg(long, short, default_value = "author_publications.txt")]
    output: PathBuf,

    /// Report format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Read profiles from a JSON file instead of Semantic Scholar
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Year the recency window ends at (defaults to the current year)
    #[arg(long)]
    current_year: Option<i32>,

    /// Semantic Scholar API key (optional)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let window = cli.current_year.map_or_else(RecencyWindow::current, RecencyWindow::new);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        authors = %cli.authors.display(),
        output = %cli.output.display(),
        current_year = window.current_year(),
        "Starting scholar digest"
    );

    // Fatal paths are checked before any lookup.
    let authors = read_authors(&cli.authors)?;

    let source: Box<dyn ProfileSource> = match &cli.profiles {
        Some(path) => Box::new(OfflineSource::from_path(path)?),
        None => {
            let mut config = Config::from_env()?;
            if cli.api_key.is_some() {
                config.api_key.clone_from(&cli.api_key);
            }
            Box::new(SemanticScholarClient::new(config)?.with_window(window))
        }
    };

    // The report file is only created once every input has loaded.
    let writer = ReportWriter::create(&cli.output)?;

    tracing::info!(authors = authors.len(), source = source.name(), "Processing author list");

    let engine = AggregationEngine::new(source.as_ref(), window);
    let aggregation = engine.process(&authors).await;

    let report = formatters::render(&aggregation, window, cli.format)?;
    let path = writer.path().to_path_buf();
    writer.write(&report)?;

    let global = &aggregation.global;
    println!("Saved publication data to {}", path.display());
    println!("Total Citations for all authors: {}", global.total_citations);
    println!(
        "Total Citations in the Last {} Years for all authors: {}",
        window.span(),
        global.recent_citations
    );
    println!("Total Unique Journals: {}", global.venue_counts.len());
    println!("Total Collaborative Papers: {}", global.collaboration_events);
    println!("Total Collaborating Institutions: {}", global.affiliation_counts.len());

    Ok(())
}
