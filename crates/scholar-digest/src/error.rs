//! Error types for the digest pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Only [`ReportError`] aborts a run; [`FetchFault`] is isolated per author.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by Semantic Scholar API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// A per-author lookup or data-contract failure.
///
/// The aggregation loop never propagates these; it logs them and substitutes
/// the defaulted author result.
#[derive(thiserror::Error, Debug)]
pub enum FetchFault {
    /// The profile lookup service failed
    #[error("lookup failed: {0}")]
    Lookup(#[from] ClientError),

    /// A dated publication carried no venue/citation field
    #[error("publication {title:?} ({year}) has no venue field")]
    MissingVenue {
        /// Publication title
        title: String,
        /// Publication year
        year: i32,
    },

    /// The profile source returned data that could not be used
    #[error("malformed profile: {0}")]
    Malformed(String),
}

impl FetchFault {
    /// Create a malformed-profile fault.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Create a missing-venue fault.
    #[must_use]
    pub fn missing_venue(title: impl Into<String>, year: i32) -> Self {
        Self::MissingVenue { title: title.into(), year }
    }
}

/// Fatal errors that abort the run before any author is processed.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// The author list could not be read
    #[error("cannot read author list {path}: {source}")]
    ReadAuthors {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The report destination could not be created or written
    #[error("cannot write report {path}: {source}")]
    WriteReport {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An offline profile file could not be loaded
    #[error("cannot load profiles {path}: {message}")]
    LoadProfiles {
        /// Profile file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for per-author fetch operations.
pub type FetchResult<T> = Result<T, FetchFault>;
