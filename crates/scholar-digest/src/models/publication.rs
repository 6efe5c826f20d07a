//! Publication record as consumed by the pipeline.

use serde::{Deserialize, Serialize};

/// A single publication from an author's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Publication title.
    pub title: String,

    /// Publication year. Undated publications are skipped by the recency filter.
    #[serde(default)]
    pub year: Option<i32>,

    /// Raw venue/citation string, e.g. `"Nature 521 (7553), 436-444, 2015"`.
    ///
    /// Required for every dated publication; its absence is a fetch fault.
    #[serde(default)]
    pub venue: Option<String>,

    /// Number of citations (0 when the source omits it).
    #[serde(default)]
    pub citation_count: u32,
}

impl PublicationRecord {
    /// Create a publication record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        year: Option<i32>,
        venue: Option<&str>,
        citation_count: u32,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            venue: venue.map(str::to_string),
            citation_count,
        }
    }

    /// Format the year for display, falling back to "n.d.".
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.map_or_else(|| "n.d.".to_string(), |y| y.to_string())
    }
}
