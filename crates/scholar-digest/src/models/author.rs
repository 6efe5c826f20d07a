//! Author profile and co-author models.

use serde::{Deserialize, Serialize};

use super::PublicationRecord;

/// A co-author listed on an author's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoAuthor {
    /// Co-author name.
    pub name: String,

    /// Institutional affiliation, if known.
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl CoAuthor {
    /// Create a co-author.
    #[must_use]
    pub fn new(name: impl Into<String>, affiliation: Option<&str>) -> Self {
        Self { name: name.into(), affiliation: affiliation.map(str::to_string) }
    }

    /// The affiliation, if present and non-empty. The string is kept as given.
    #[must_use]
    pub fn affiliation(&self) -> Option<&str> {
        self.affiliation.as_deref().filter(|a| !a.is_empty())
    }
}

/// A fully resolved author profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    /// Name as given in the author list.
    #[serde(default)]
    pub query_name: String,

    /// Name as resolved by the profile source.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Total citations reported by the source.
    #[serde(default)]
    pub total_citations: u64,

    /// Citations reported for the recent window.
    #[serde(default)]
    pub recent_citations: u64,

    /// Full publication list, in source order.
    #[serde(default)]
    pub publications: Vec<PublicationRecord>,

    /// Co-authors, in source order.
    #[serde(default)]
    pub coauthors: Vec<CoAuthor>,
}

impl AuthorProfile {
    /// Get the display name, falling back to the query name.
    #[must_use]
    pub fn name_or_query(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.query_name)
    }
}
