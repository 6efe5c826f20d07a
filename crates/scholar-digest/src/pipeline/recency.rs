//! Recency window filtering and per-author venue tallies.

use chrono::{Datelike, Utc};
use serde::Serialize;

use super::{CountMap, canonicalize};
use crate::config::report::RECENT_YEARS;
use crate::error::{FetchFault, FetchResult};
use crate::models::PublicationRecord;

/// Trailing year window, inclusive at both ends of `current_year - span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecencyWindow {
    current_year: i32,
    span: i32,
}

impl RecencyWindow {
    /// Window of the default span ending at `current_year`.
    #[must_use]
    pub const fn new(current_year: i32) -> Self {
        Self { current_year, span: RECENT_YEARS }
    }

    /// Window with an explicit span.
    #[must_use]
    pub const fn with_span(current_year: i32, span: i32) -> Self {
        Self { current_year, span }
    }

    /// Window ending at the current calendar year (UTC).
    #[must_use]
    pub fn current() -> Self {
        Self::new(Utc::now().year())
    }

    /// The year the window ends at.
    #[must_use]
    pub const fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Window length in years.
    #[must_use]
    pub const fn span(&self) -> i32 {
        self.span
    }

    /// Whether `year` is recent. Years after `current_year` count as recent.
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        i64::from(self.current_year) - i64::from(year) <= i64::from(self.span)
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::current()
    }
}

/// Publications retained by the recency filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentPublications {
    /// Recent publications, in source order.
    pub publications: Vec<PublicationRecord>,

    /// Canonical venue counts over the recent publications.
    pub venue_counts: CountMap,
}

/// Keep publications inside `window` and tally their canonical venues.
///
/// Undated publications are skipped. A dated publication without a venue
/// field breaks the source contract and fails the whole author.
pub fn filter_recent(
    publications: &[PublicationRecord],
    window: RecencyWindow,
) -> FetchResult<RecentPublications> {
    let mut recent = RecentPublications::default();

    for publication in publications {
        let Some(year) = publication.year else {
            continue;
        };

        let Some(raw_venue) = publication.venue.as_deref() else {
            return Err(FetchFault::missing_venue(&publication.title, year));
        };

        if !window.contains(year) {
            continue;
        }

        recent.publications.push(publication.clone());

        let venue = canonicalize(raw_venue);
        if !venue.is_empty() {
            *recent.venue_counts.entry(venue).or_default() += 1;
        }
    }

    Ok(recent)
}
