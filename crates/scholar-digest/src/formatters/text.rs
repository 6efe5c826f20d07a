//! Plain-text report output.

use super::{by_count, by_name, rank_authors};
use crate::pipeline::{Aggregation, AuthorReport, GlobalAggregate, RecencyWindow};

/// Render the full text report: one block per author, then global totals.
#[must_use]
pub fn render_report(aggregation: &Aggregation, window: RecencyWindow) -> String {
    let mut output = String::new();

    for author in rank_authors(&aggregation.authors) {
        output.push_str(&format_author_block(author, window));
        output.push('\n');
    }

    output.push_str(&format_global_block(&aggregation.global, window));
    output
}

fn format_author_block(author: &AuthorReport, window: RecencyWindow) -> String {
    let span = window.span();
    let mut output = format!(
        "{} (Total Citations: {}, Citations Last {span} Years: {}):\n",
        author.author, author.total_citations, author.recent_citations
    );

    output.push_str(&format!("Top Paper: {}\n", author.top_paper));

    output.push_str(&format!("Journals Published In: {}\n", author.venue_counts.len()));
    output.push_str("Journals and their counts:\n");
    for (venue, count) in by_count(&author.venue_counts) {
        output.push_str(&format!("  - {venue}: {count} publication(s)\n"));
    }

    output.push_str(&format!("Publications (Last {span} Years):\n"));
    for publication in &author.publications {
        output.push_str(&format!("  - {} ({})\n", publication.title, publication.year_label()));
    }

    output.push_str(&format!("Collaborating Institutions: {}\n", author.affiliation_counts.len()));
    output.push_str("Institutions:\n");
    for (affiliation, count) in by_name(&author.affiliation_counts) {
        output.push_str(&format!("  - {affiliation}: {count} collaboration(s)\n"));
    }

    output
}

fn format_global_block(global: &GlobalAggregate, window: RecencyWindow) -> String {
    let mut output = format!("Total Citations for all authors: {}\n", global.total_citations);
    output.push_str(&format!(
        "Total Citations in the Last {} Years for all authors: {}\n",
        window.span(),
        global.recent_citations
    ));

    output.push_str(&format!("Total Unique Journals: {}\n", global.venue_counts.len()));
    output.push_str("Overall Journal Counts:\n");
    for (venue, count) in by_count(&global.venue_counts) {
        output.push_str(&format!("  - {venue}: {count} publication(s)\n"));
    }

    output.push_str(&format!("Total Collaborative Papers: {}\n", global.collaboration_events));
    output.push_str(&format!(
        "Total Collaborating Institutions: {}\n",
        global.affiliation_counts.len()
    ));
    output.push_str("Overall Institution Counts:\n");
    for (affiliation, count) in by_count(&global.affiliation_counts) {
        output.push_str(&format!("  - {affiliation}: {count} collaboration(s)\n"));
    }

    output
}
