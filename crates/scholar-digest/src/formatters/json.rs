//! JSON report output.

use serde_json::json;

use super::{by_count, by_name, rank_authors};
use crate::pipeline::{Aggregation, RecencyWindow};

/// Render the report as pretty-printed JSON, with the same ordering as the text report.
pub fn render_json(
    aggregation: &Aggregation,
    window: RecencyWindow,
) -> Result<String, serde_json::Error> {
    let counted = |entries: Vec<(&str, u32)>| {
        entries
            .into_iter()
            .map(|(name, count)| json!({"name": name, "count": count}))
            .collect::<Vec<_>>()
    };

    let authors: Vec<_> = rank_authors(&aggregation.authors)
        .into_iter()
        .map(|author| {
            json!({
                "author": author.author,
                "totalCitations": author.total_citations,
                "recentCitations": author.recent_citations,
                "topPaper": author.top_paper,
                "venues": counted(by_count(&author.venue_counts)),
                "recentPublications": author.publications,
                "affiliations": counted(by_name(&author.affiliation_counts)),
                "collaborationEvents": author.collaboration_events,
            })
        })
        .collect();

    let global = &aggregation.global;

    serde_json::to_string_pretty(&json!({
        "currentYear": window.current_year(),
        "recentYears": window.span(),
        "authors": authors,
        "totals": {
            "totalCitations": global.total_citations,
            "recentCitations": global.recent_citations,
            "venues": counted(by_count(&global.venue_counts)),
            "collaborativePapers": global.collaboration_events,
            "institutions": counted(by_count(&global.affiliation_counts)),
        }
    }))
}
