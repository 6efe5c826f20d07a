//! Collaboration tracking from co-author affiliations.

use serde::Serialize;

use super::CountMap;
use crate::models::CoAuthor;

/// Affiliation tallies for one author's co-author list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collaborations {
    /// Affiliation name to number of listed co-authors from it.
    pub affiliation_counts: CountMap,

    /// Number of co-authors with an affiliation.
    pub events: u32,
}

/// Tally co-author affiliations.
///
/// Every listed co-author with a non-empty affiliation counts once, keyed by
/// the affiliation exactly as given. Repeated names are not merged.
#[must_use]
pub fn track_collaborations(coauthors: &[CoAuthor]) -> Collaborations {
    let mut collaborations = Collaborations::default();

    for affiliation in coauthors.iter().filter_map(CoAuthor::affiliation) {
        *collaborations.affiliation_counts.entry(affiliation.to_string()).or_default() += 1;
        collaborations.events += 1;
    }

    collaborations
}
