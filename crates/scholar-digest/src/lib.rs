//! Scholar Digest
//!
//! Builds a citation digest for a list of researchers: per-author citation
//! summaries, canonical venue counts, recent publications, and collaboration
//! statistics derived from co-author affiliations.
//!
//! # Pipeline
//!
//! - **Venue canonicalization**: strips years, volumes, issues and page ranges
//! - **Recency filter**: keeps publications from the trailing five-year window
//! - **Top paper**: most-cited publication over the full record
//! - **Collaborations**: affiliation tallies from the co-author list
//! - **Aggregation**: per-author failure isolation and global totals
//! - **Rendering**: deterministically sorted text or JSON report
//!
//! # Example
//!
//! ```no_run
//! use scholar_digest::{
//!     AggregationEngine, RecencyWindow, SemanticScholarClient, config::Config,
//!     formatters::render_report,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SemanticScholarClient::new(Config::from_env()?)?;
//!     let window = RecencyWindow::current();
//!     let engine = AggregationEngine::new(&client, window);
//!
//!     let names = vec!["Geoffrey Hinton".to_string()];
//!     let aggregation = engine.process(&names).await;
//!     println!("{}", render_report(&aggregation, window));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod source;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, FetchFault, ReportError};
pub use pipeline::{AggregationEngine, Aggregation, AuthorReport, GlobalAggregate, RecencyWindow};
pub use source::{OfflineSource, ProfileCandidate, ProfileSource};
