//! Semantic Scholar Graph API response shapes.

use serde::{Deserialize, Serialize};

use super::PublicationRecord;

/// Author search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiAuthorSearchResult {
    /// Total matching authors.
    #[serde(default)]
    pub total: i64,

    /// List of authors, best match first.
    #[serde(default)]
    pub data: Vec<ApiAuthor>,
}

/// A research author from Semantic Scholar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAuthor {
    /// Unique Semantic Scholar author ID.
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Author's institutional affiliations.
    #[serde(default)]
    pub affiliations: Vec<String>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i64>,
}

impl ApiAuthor {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Get the primary affiliation if available.
    #[must_use]
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.first().map(String::as_str)
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> u64 {
        self.citation_count.unwrap_or(0).max(0) as u64
    }
}

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAuthorRef {
    /// Author ID (absent for unresolved authors).
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Journal details attached to a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiJournal {
    /// Journal name.
    #[serde(default)]
    pub name: Option<String>,

    /// Volume, e.g. `"521"` or `"abs/2101.00001"` for arXiv.
    #[serde(default)]
    pub volume: Option<String>,

    /// Page range.
    #[serde(default)]
    pub pages: Option<String>,
}

/// A paper as returned by the author papers endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPaper {
    /// Unique Semantic Scholar paper ID.
    #[serde(default)]
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Journal name, volume and pages.
    #[serde(default)]
    pub journal: Option<ApiJournal>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<ApiAuthorRef>,
}

impl ApiPaper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> u32 {
        self.citation_count.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Assemble a Scholar-style citation string for this paper.
    ///
    /// Prefers `"<journal> <volume>, <pages>"`; arXiv journals become
    /// `"arXiv preprint arXiv:<id>"`. Falls back to the bare `venue` field,
    /// and returns `None` only when the API sent neither.
    #[must_use]
    pub fn citation_string(&self) -> Option<String> {
        let journal_name = self
            .journal
            .as_ref()
            .and_then(|j| j.name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty());

        if let (Some(journal), Some(name)) = (self.journal.as_ref(), journal_name) {
            if name.eq_ignore_ascii_case("arxiv") {
                let id = journal
                    .volume
                    .as_deref()
                    .map(|v| v.trim_start_matches("abs/"))
                    .unwrap_or_default();
                return Some(format!("arXiv preprint arXiv:{id}"));
            }

            let mut citation = name.to_string();
            if let Some(volume) = journal.volume.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                citation.push(' ');
                citation.push_str(volume);
            }
            if let Some(pages) = journal.pages.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
                citation.push_str(", ");
                citation.push_str(pages);
            }
            return Some(citation);
        }

        self.venue.clone()
    }

    /// Convert into the pipeline's publication record.
    #[must_use]
    pub fn into_record(self) -> PublicationRecord {
        PublicationRecord {
            venue: self.citation_string(),
            citation_count: self.citations(),
            year: self.year,
            title: self.title.unwrap_or_else(|| "Untitled".to_string()),
        }
    }
}

/// One page of an author's papers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiPapersPage {
    /// Offset of this page.
    #[serde(default)]
    pub offset: u32,

    /// Next offset if more results.
    #[serde(default)]
    pub next: Option<u32>,

    /// Papers in this page.
    #[serde(default)]
    pub data: Vec<ApiPaper>,
}
