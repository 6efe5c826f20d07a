//! Per-author orchestration and global aggregation.

use serde::Serialize;

use super::{
    CountMap, RecencyWindow, filter_recent, merge_counts, select_top, track_collaborations,
};
use crate::config::report::NO_TOP_PAPER;
use crate::error::FetchResult;
use crate::models::{AuthorProfile, PublicationRecord};
use crate::source::ProfileSource;

/// Digest of one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorReport {
    /// Name as given in the author list.
    pub author: String,

    /// Total citations reported by the source.
    pub total_citations: u64,

    /// Recent-window citations reported by the source.
    pub recent_citations: u64,

    /// Title of the most-cited publication, or "N/A".
    pub top_paper: String,

    /// Canonical venue counts over recent publications.
    pub venue_counts: CountMap,

    /// Co-author affiliation counts.
    pub affiliation_counts: CountMap,

    /// Co-authors with an affiliation.
    pub collaboration_events: u32,

    /// Recent publications, in source order.
    pub publications: Vec<PublicationRecord>,
}

impl AuthorReport {
    /// The zero-valued report used when a lookup fails or finds nothing.
    #[must_use]
    pub fn defaulted(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            total_citations: 0,
            recent_citations: 0,
            top_paper: NO_TOP_PAPER.to_string(),
            venue_counts: CountMap::new(),
            affiliation_counts: CountMap::new(),
            collaboration_events: 0,
            publications: Vec::new(),
        }
    }

    /// Digest a resolved profile.
    ///
    /// Citation totals are the profile's own figures, not recomputed from
    /// its publications.
    pub fn from_profile(
        author: impl Into<String>,
        profile: &AuthorProfile,
        window: RecencyWindow,
    ) -> FetchResult<Self> {
        let recent = filter_recent(&profile.publications, window)?;
        let top_paper = select_top(&profile.publications)
            .map_or_else(|| NO_TOP_PAPER.to_string(), |p| p.title.clone());
        let collaborations = track_collaborations(&profile.coauthors);

        Ok(Self {
            author: author.into(),
            total_citations: profile.total_citations,
            recent_citations: profile.recent_citations,
            top_paper,
            venue_counts: recent.venue_counts,
            affiliation_counts: collaborations.affiliation_counts,
            collaboration_events: collaborations.events,
            publications: recent.publications,
        })
    }
}

/// Totals across all authors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalAggregate {
    /// Canonical venue counts summed over authors.
    pub venue_counts: CountMap,

    /// Affiliation counts summed over authors.
    pub affiliation_counts: CountMap,

    /// Collaboration events summed over authors.
    pub collaboration_events: u64,

    /// Sum of total citations.
    pub total_citations: u64,

    /// Sum of recent citations.
    pub recent_citations: u64,
}

impl GlobalAggregate {
    /// Fold author reports into a fresh aggregate.
    #[must_use]
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a AuthorReport>) -> Self {
        reports.into_iter().fold(Self::default(), |mut global, report| {
            global.absorb(report);
            global
        })
    }

    /// Add one author's report.
    pub fn absorb(&mut self, report: &AuthorReport) {
        merge_counts(&mut self.venue_counts, &report.venue_counts);
        merge_counts(&mut self.affiliation_counts, &report.affiliation_counts);
        self.collaboration_events += u64::from(report.collaboration_events);
        self.total_citations += report.total_citations;
        self.recent_citations += report.recent_citations;
    }

    /// Combine two partial aggregates. Order does not matter.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        merge_counts(&mut self.venue_counts, &other.venue_counts);
        merge_counts(&mut self.affiliation_counts, &other.affiliation_counts);
        self.collaboration_events += other.collaboration_events;
        self.total_citations += other.total_citations;
        self.recent_citations += other.recent_citations;
        self
    }
}

/// Result of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    /// One report per input name, in input order.
    pub authors: Vec<AuthorReport>,

    /// Totals across all authors.
    pub global: GlobalAggregate,
}

/// Drives lookups and aggregation over an author list.
pub struct AggregationEngine<'a, S: ?Sized> {
    source: &'a S,
    window: RecencyWindow,
}

impl<'a, S: ProfileSource + ?Sized> AggregationEngine<'a, S> {
    /// Create an engine over `source`.
    #[must_use]
    pub const fn new(source: &'a S, window: RecencyWindow) -> Self {
        Self { source, window }
    }

    /// Process every author, one at a time, in input order.
    ///
    /// Never fails: authors whose lookup faults or finds nothing get a
    /// defaulted report and the run moves on.
    pub async fn process(&self, authors: &[String]) -> Aggregation {
        let mut aggregation = Aggregation::default();

        for author in authors {
            tracing::info!(source = self.source.name(), "Searching for {author}...");

            let report = match self.process_author(author).await {
                Ok(Some(report)) => report,
                Ok(None) => {
                    tracing::info!("No results found for {author}.");
                    AuthorReport::defaulted(author.as_str())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Error fetching data for {author}: {e}");
                    AuthorReport::defaulted(author.as_str())
                }
            };

            aggregation.global.absorb(&report);
            aggregation.authors.push(report);
        }

        tracing::debug!(
            authors = aggregation.authors.len(),
            total_citations = aggregation.global.total_citations,
            "Aggregation complete"
        );

        aggregation
    }

    /// Look up and digest a single author.
    ///
    /// `Ok(None)` means the source had no candidate.
    pub async fn process_author(&self, author: &str) -> FetchResult<Option<AuthorReport>> {
        let Some(candidate) = self.source.search(author).await? else {
            return Ok(None);
        };

        let profile = self.source.fill(candidate).await?;
        tracing::info!(
            publications = profile.publications.len(),
            coauthors = profile.coauthors.len(),
            "Found {author}: {}",
            profile.name_or_query()
        );

        AuthorReport::from_profile(author, &profile, self.window).map(Some)
    }
}

impl<S: ?Sized> std::fmt::Debug for AggregationEngine<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregationEngine").field("window", &self.window).finish()
    }
}
