//! Semantic Scholar API client.
//!
//! Provides the live [`ProfileSource`]:
//! - Connection pooling via reqwest
//! - Response caching, so repeated names in one run hit the API once
//! - Status mapping into [`ClientError`]; faults are never retried

use std::collections::HashSet;

use moka::future::Cache;
use reqwest::Client;

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult, FetchResult};
use crate::models::{
    ApiAuthor, ApiAuthorSearchResult, ApiPaper, ApiPapersPage, AuthorProfile, CoAuthor,
};
use crate::pipeline::RecencyWindow;
use crate::source::{ProfileCandidate, ProfileSource};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client.
    client: Client,

    /// Response cache.
    cache: Cache<String, serde_json::Value>,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Page size for paper listings.
    papers_page_size: u32,

    /// Upper bound on papers per author.
    max_papers: usize,

    /// Upper bound on co-authors per author.
    max_coauthors: usize,

    /// Window used to derive recent citations.
    window: RecencyWindow,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            cache,
            api_key: config.api_key,
            graph_api_url: config.graph_api_url,
            papers_page_size: config.papers_page_size,
            max_papers: config.max_papers,
            max_coauthors: config.max_coauthors,
            window: RecencyWindow::current(),
        })
    }

    /// Use `window` when deriving recent citations.
    #[must_use]
    pub fn with_window(mut self, window: RecencyWindow) -> Self {
        self.window = window;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for authors by name.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_authors(&self, query: &str, limit: u32) -> ClientResult<ApiAuthorSearchResult> {
        let url = format!("{}/author/search", self.graph_api_url);

        let params = vec![
            ("query".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields::AUTHOR_SEARCH.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get an author by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author(&self, author_id: &str) -> ClientResult<ApiAuthor> {
        let url = format!("{}/author/{}", self.graph_api_url, author_id);
        let params = vec![("fields".to_string(), fields::AUTHOR_PROFILE.join(","))];

        self.get(&url, &params).await
    }

    /// Get one page of an author's papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author_papers(
        &self,
        author_id: &str,
        offset: u32,
        limit: u32,
    ) -> ClientResult<ApiPapersPage> {
        let url = format!("{}/author/{}/papers", self.graph_api_url, author_id);

        let params = vec![
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields::AUTHOR_PAPERS.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get all of an author's papers, following pagination up to the configured cap.
    ///
    /// # Errors
    ///
    /// Returns error on API failure of any page.
    pub async fn get_all_author_papers(&self, author_id: &str) -> ClientResult<Vec<ApiPaper>> {
        let mut papers = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.get_author_papers(author_id, offset, self.papers_page_size).await?;
            papers.extend(page.data);

            match page.next {
                Some(next) if papers.len() < self.max_papers && next > offset => offset = next,
                _ => break,
            }
        }

        papers.truncate(self.max_papers);
        Ok(papers)
    }

    /// Get multiple authors by ID (batch API).
    ///
    /// Invalid IDs are filtered out (API returns null for them).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_authors_batch(&self, author_ids: &[String]) -> ClientResult<Vec<ApiAuthor>> {
        let url = format!("{}/author/batch", self.graph_api_url);
        let params = vec![("fields".to_string(), fields::COAUTHOR.join(","))];

        let body = serde_json::json!({
            "ids": author_ids
        });

        // API returns [Author, null, Author] for invalid IDs - filter nulls
        let results: Vec<Option<ApiAuthor>> = self.post(&url, &params, &body).await?;
        Ok(results.into_iter().flatten().collect())
    }

    /// Distinct co-author IDs across `papers`, in first-seen order.
    fn coauthor_ids(&self, author_id: &str, papers: &[ApiPaper]) -> Vec<String> {
        let mut seen = HashSet::new();

        papers
            .iter()
            .flat_map(|paper| &paper.authors)
            .filter_map(|a| a.author_id.as_deref())
            .filter(|id| *id != author_id && seen.insert(*id))
            .take(self.max_coauthors)
            .map(str::to_string)
            .collect()
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        // Check cache
        let cache_key = self.cache_key("GET", url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return serde_json::from_value(cached).map_err(ClientError::from);
        }

        let response = self.client.get(url).query(params).send().await?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        // Cache response
        self.cache.insert(cache_key, value.clone()).await;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Make a POST request.
    async fn post<T>(
        &self,
        url: &str,
        params: &[(String, String)],
        body: &serde_json::Value,
    ) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body_str = serde_json::to_string(body)?;

        let response = self.client.post(url).query(params).body(body_str).send().await?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

#[async_trait::async_trait]
impl ProfileSource for SemanticScholarClient {
    fn name(&self) -> &'static str {
        "semantic-scholar"
    }

    async fn search(&self, author: &str) -> FetchResult<Option<ProfileCandidate>> {
        let result = self.search_authors(author, 1).await?;

        Ok(result.data.into_iter().next().map(|hit| {
            ProfileCandidate::new(hit.author_id, author).with_display_name(hit.name)
        }))
    }

    async fn fill(&self, candidate: ProfileCandidate) -> FetchResult<AuthorProfile> {
        let author = self.get_author(&candidate.id).await?;
        let papers = self.get_all_author_papers(&candidate.id).await?;

        let coauthor_ids = self.coauthor_ids(&candidate.id, &papers);
        let coauthors = if coauthor_ids.is_empty() {
            Vec::new()
        } else {
            self.get_authors_batch(&coauthor_ids)
                .await?
                .iter()
                .map(|c| CoAuthor::new(c.name_or_default(), c.primary_affiliation()))
                .collect()
        };

        let recent_citations = papers
            .iter()
            .filter(|p| p.year.is_some_and(|y| self.window.contains(y)))
            .map(|p| u64::from(p.citations()))
            .sum();

        tracing::debug!(
            author_id = %candidate.id,
            papers = papers.len(),
            coauthors = coauthors.len(),
            "Filled Semantic Scholar profile"
        );

        Ok(AuthorProfile {
            query_name: candidate.query_name,
            display_name: author.name.clone().or(candidate.display_name),
            total_citations: author.citations(),
            recent_citations,
            publications: papers.into_iter().map(ApiPaper::into_record).collect(),
            coauthors,
        })
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
