//! Profile sources: the lookup seam between the pipeline and a bibliographic service.
//!
//! A lookup is two calls: `search` picks at most one candidate for a name,
//! and `fill` expands that candidate into a full [`AuthorProfile`].

mod offline;

pub use offline::OfflineSource;

use crate::error::FetchResult;
use crate::models::AuthorProfile;

/// A search hit that has not been filled yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCandidate {
    /// Source-specific identifier used by `fill`.
    pub id: String,

    /// Name as given in the author list.
    pub query_name: String,

    /// Name reported by the search, if any.
    pub display_name: Option<String>,
}

impl ProfileCandidate {
    /// Create a candidate.
    #[must_use]
    pub fn new(id: impl Into<String>, query_name: impl Into<String>) -> Self {
        Self { id: id.into(), query_name: query_name.into(), display_name: None }
    }

    /// Attach the display name reported by the search.
    #[must_use]
    pub fn with_display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }
}

/// Resolves author names to profiles.
#[async_trait::async_trait]
pub trait ProfileSource: Send + Sync {
    /// Short source name for logs.
    fn name(&self) -> &'static str;

    /// Find the best candidate for `author`, or `None` when nothing matches.
    async fn search(&self, author: &str) -> FetchResult<Option<ProfileCandidate>>;

    /// Fetch the full profile for a candidate.
    async fn fill(&self, candidate: ProfileCandidate) -> FetchResult<AuthorProfile>;
}
