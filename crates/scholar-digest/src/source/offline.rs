//! Profile source backed by a local JSON file.

use std::collections::HashMap;
use std::path::Path;

use super::{ProfileCandidate, ProfileSource};
use crate::error::{FetchFault, FetchResult, ReportError};
use crate::models::AuthorProfile;

/// Profiles keyed by query name, loaded from JSON.
///
/// The file is an object mapping each author name to a profile, or to
/// `null` for a name that should resolve to no candidate:
///
/// ```json
/// {
///   "Ada Lovelace": {
///     "displayName": "A. Lovelace",
///     "totalCitations": 10,
///     "publications": [{"title": "Notes", "year": 1843, "venue": "Taylor's Scientific Memoirs"}],
///     "coauthors": [{"name": "C. Babbage", "affiliation": "Cambridge"}]
///   },
///   "Nobody": null
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OfflineSource {
    profiles: HashMap<String, Option<AuthorProfile>>,
}

impl OfflineSource {
    /// Build a source from in-memory profiles.
    #[must_use]
    pub fn new(profiles: HashMap<String, Option<AuthorProfile>>) -> Self {
        Self { profiles }
    }

    /// Parse a source from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a source from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let load_error = |message: String| ReportError::LoadProfiles {
            path: path.to_path_buf(),
            message,
        };

        let json = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let source = Self::from_json(&json).map_err(|e| load_error(e.to_string()))?;

        tracing::debug!(path = %path.display(), profiles = source.len(), "Loaded offline profiles");
        Ok(source)
    }

    /// Number of names known to this source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the source knows no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait::async_trait]
impl ProfileSource for OfflineSource {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn search(&self, author: &str) -> FetchResult<Option<ProfileCandidate>> {
        Ok(self.profiles.get(author).and_then(Option::as_ref).map(|profile| {
            ProfileCandidate::new(author, author).with_display_name(profile.display_name.clone())
        }))
    }

    async fn fill(&self, candidate: ProfileCandidate) -> FetchResult<AuthorProfile> {
        let profile = self
            .profiles
            .get(&candidate.id)
            .and_then(Option::as_ref)
            .ok_or_else(|| FetchFault::malformed(format!("unknown candidate {:?}", candidate.id)))?;

        Ok(AuthorProfile { query_name: candidate.query_name, ..profile.clone() })
    }
}
