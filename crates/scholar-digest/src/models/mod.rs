//! Data models for profiles, publications and Semantic Scholar responses.
//!
//! Every field the pipeline reads is declared either required or `Option`,
//! with `#[serde(default)]` documenting the fallback for absent values.

mod author;
mod enums;
mod publication;
mod scholar;

pub use author::{AuthorProfile, CoAuthor};
pub use enums::OutputFormat;
pub use publication::PublicationRecord;
pub use scholar::{
    ApiAuthor, ApiAuthorRef, ApiAuthorSearchResult, ApiJournal, ApiPaper, ApiPapersPage,
};
