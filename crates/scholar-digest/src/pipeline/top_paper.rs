//! Top paper selection.

use crate::models::PublicationRecord;

/// Return the most-cited publication; the earliest one wins ties.
///
/// `Iterator::max_by_key` keeps the last maximum, so this reduces with a
/// strict comparison instead.
#[must_use]
pub fn select_top(publications: &[PublicationRecord]) -> Option<&PublicationRecord> {
    publications
        .iter()
        .reduce(|best, candidate| {
            if candidate.citation_count > best.citation_count { candidate } else { best }
        })
}
