//! Normalization, aggregation and ranking pipeline.
//!
//! Stages run per author in this order:
//! - [`venue`]: raw citation string to canonical venue name
//! - [`recency`]: trailing-window filter and per-author venue tally
//! - [`top_paper`]: most-cited publication
//! - [`collaboration`]: co-author affiliation tally
//! - [`aggregate`]: per-author orchestration and global merge

use std::collections::BTreeMap;

pub mod aggregate;
pub mod collaboration;
pub mod recency;
pub mod top_paper;
pub mod venue;

pub use aggregate::{AggregationEngine, Aggregation, AuthorReport, GlobalAggregate};
pub use collaboration::{Collaborations, track_collaborations};
pub use recency::{RecencyWindow, RecentPublications, filter_recent};
pub use top_paper::select_top;
pub use venue::canonicalize;

/// Name-keyed tally. Iterates in ascending key order, which is the tie-break
/// for every count-sorted listing in the report.
pub type CountMap = BTreeMap<String, u32>;

/// Add every count of `from` into `into`.
pub(crate) fn merge_counts(into: &mut CountMap, from: &CountMap) {
    for (key, count) in from {
        *into.entry(key.clone()).or_default() += count;
    }
}
