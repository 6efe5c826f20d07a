//! Report rendering.
//!
//! Rendering only orders and prints; every number comes from the
//! [`Aggregation`] built by the pipeline.

mod json;
mod text;

pub use json::render_json;
pub use text::render_report;

use crate::models::OutputFormat;
use crate::pipeline::{Aggregation, AuthorReport, CountMap, RecencyWindow};

/// Render `aggregation` in the requested format.
pub fn render(
    aggregation: &Aggregation,
    window: RecencyWindow,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_report(aggregation, window)),
        OutputFormat::Json => render_json(aggregation, window),
    }
}

/// Authors by total citations, descending. Equal totals keep input order.
#[must_use]
pub fn rank_authors(authors: &[AuthorReport]) -> Vec<&AuthorReport> {
    let mut ranked: Vec<_> = authors.iter().collect();
    ranked.sort_by(|a, b| b.total_citations.cmp(&a.total_citations));
    ranked
}

/// Entries by count, descending; equal counts by name, ascending.
#[must_use]
pub fn by_count(counts: &CountMap) -> Vec<(&str, u32)> {
    let mut entries = by_name(counts);
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Entries by name, ascending.
#[must_use]
pub fn by_name(counts: &CountMap) -> Vec<(&str, u32)> {
    counts.iter().map(|(name, count)| (name.as_str(), *count)).collect()
}
