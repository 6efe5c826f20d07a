//! Venue canonicalization.
//!
//! Scholar-style citation strings mix the venue name with years, volumes,
//! issues and page ranges (`"Proc. 2021 19 (1), 5-10"`). Canonicalization
//! strips that noise with an ordered list of independent rules so that
//! publications in the same venue share one key.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::report::{ARXIV_PREFIX, ARXIV_VENUE};

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year pattern"));

static VOLUME_ISSUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*\(\d+\)").expect("valid volume pattern"));

static PAGE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+,\s*\d+|\d+-\d+").expect("valid page pattern"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

static TRAILING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,\-:]+$").expect("valid separator pattern"));

/// One text transform in the canonicalization sequence.
#[derive(Debug, Clone, Copy)]
pub struct VenueRule {
    /// Short rule name.
    pub name: &'static str,
    apply: fn(&str) -> String,
}

impl VenueRule {
    /// Apply this rule to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        (self.apply)(text)
    }
}

/// Canonicalization rules, in application order.
pub const RULES: [VenueRule; 5] = [
    VenueRule { name: "years", apply: strip_years },
    VenueRule { name: "volume_issue", apply: strip_volume_issue },
    VenueRule { name: "page_ranges", apply: strip_page_ranges },
    VenueRule { name: "digits", apply: strip_digits },
    VenueRule { name: "trailing_separators", apply: strip_trailing_separators },
];

/// Map a raw venue/citation string to its canonical venue name.
///
/// arXiv preprints collapse to `"arXiv"`. The result may be empty when the
/// input was only numbers and punctuation; callers treat that as unnamed.
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    if raw.starts_with(ARXIV_PREFIX) {
        return ARXIV_VENUE.to_string();
    }

    RULES.iter().fold(raw.to_string(), |text, rule| rule.apply(&text))
}

/// Remove every 4-digit run.
#[must_use]
pub fn strip_years(text: &str) -> String {
    YEAR.replace_all(text, "").into_owned()
}

/// Remove `<volume> (<issue>)` groups.
#[must_use]
pub fn strip_volume_issue(text: &str) -> String {
    VOLUME_ISSUE.replace_all(text, "").into_owned()
}

/// Remove `<n>,<m>` and `<n>-<m>` page ranges.
#[must_use]
pub fn strip_page_ranges(text: &str) -> String {
    PAGE_RANGE.replace_all(text, "").into_owned()
}

/// Remove any remaining digit runs.
#[must_use]
pub fn strip_digits(text: &str) -> String {
    DIGITS.replace_all(text, "").into_owned()
}

/// Remove trailing whitespace, commas, hyphens and colons, then trim.
#[must_use]
pub fn strip_trailing_separators(text: &str) -> String {
    TRAILING_SEPARATORS.replace(text, "").trim().to_string()
}
