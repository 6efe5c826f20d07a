//! Configuration for the digest run.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Cache TTL (one run rarely exceeds this).
    pub const CACHE_TTL: Duration = Duration::from_secs(600);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Page size for the author papers endpoint (API maximum).
    pub const PAPERS_PAGE_SIZE: u32 = 1000;

    /// Upper bound on papers fetched per author.
    pub const MAX_PAPERS: usize = 5000;

    /// Upper bound on co-authors resolved per author (author batch limit).
    pub const MAX_COAUTHORS: usize = 1000;
}

/// Field sets for API requests.
pub mod fields {
    /// Fields needed to pick a search candidate.
    pub const AUTHOR_SEARCH: &[&str] = &["name"];

    /// Fields for the filled author profile.
    pub const AUTHOR_PROFILE: &[&str] = &["name", "citationCount"];

    /// Fields for each of the author's papers.
    pub const AUTHOR_PAPERS: &[&str] =
        &["title", "year", "venue", "journal", "citationCount", "authors"];

    /// Fields for resolving co-author affiliations.
    pub const COAUTHOR: &[&str] = &["name", "affiliations"];
}

/// Report constants.
pub mod report {
    /// Trailing window, in years, for recent publications (inclusive).
    pub const RECENT_YEARS: i32 = 5;

    /// Top paper placeholder when an author has no publications.
    pub const NO_TOP_PAPER: &str = "N/A";

    /// Canonical venue for arXiv preprints.
    pub const ARXIV_VENUE: &str = "arXiv";

    /// Raw citation prefix identifying arXiv preprints.
    pub const ARXIV_PREFIX: &str = "arXiv preprint arXiv";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,

    /// Page size for paper listings.
    pub papers_page_size: u32,

    /// Upper bound on papers fetched per author.
    pub max_papers: usize,

    /// Upper bound on co-authors resolved per author.
    pub max_coauthors: usize,
}

impl Config {
    /// Create a new configuration with optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            papers_page_size: api::PAPERS_PAGE_SIZE,
            max_papers: api::MAX_PAPERS,
            max_coauthors: api::MAX_COAUTHORS,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            cache_ttl: Duration::from_secs(0), // No caching in tests
            cache_max_size: 0,
            papers_page_size: api::PAPERS_PAGE_SIZE,
            max_papers: api::MAX_PAPERS,
            max_coauthors: api::MAX_COAUTHORS,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY`, after loading a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok().filter(|k| !k.is_empty());
        Ok(Self::new(api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
