//! Property-based tests for the pipeline stages.

use proptest::prelude::*;
use scholar_digest::GlobalAggregate;
use scholar_digest::models::{AuthorProfile, CoAuthor, PublicationRecord};
use scholar_digest::pipeline::{
    AuthorReport, RecencyWindow, canonicalize, filter_recent, select_top, track_collaborations,
};

const ARXIV_PREFIX: &str = "arXiv preprint arXiv";

/// Generate publications that always carry a venue string.
fn arb_publication() -> impl Strategy<Value = PublicationRecord> {
    (
        "[A-Za-z ]{1,20}",                            // title
        proptest::option::of(1990i32..2030),          // year
        "[A-Za-z0-9 .,:()-]{0,40}",                   // venue
        0u32..1000,                                   // citations
    )
        .prop_map(|(title, year, venue, citations)| {
            PublicationRecord::new(title, year, Some(&venue), citations)
        })
}

fn arb_coauthor() -> impl Strategy<Value = CoAuthor> {
    let affiliations = vec!["MIT", "MIT ", "ETH", "Acme University", " ", ""];
    ("[A-Za-z]{1,10}", proptest::option::of(proptest::sample::select(affiliations)))
        .prop_map(|(name, affiliation)| CoAuthor::new(name, affiliation))
}

fn arb_report() -> impl Strategy<Value = AuthorReport> {
    (
        proptest::collection::vec(arb_publication(), 0..8),
        proptest::collection::vec(arb_coauthor(), 0..8),
        0u64..10_000,
    )
        .prop_map(|(publications, coauthors, citations)| {
            let profile = AuthorProfile {
                query_name: "x".to_string(),
                display_name: None,
                total_citations: citations,
                recent_citations: citations / 2,
                publications,
                coauthors,
            };
            AuthorReport::from_profile("x", &profile, RecencyWindow::new(2025))
                .expect("every generated publication has a venue")
        })
}

proptest! {
    /// arXiv preprints always collapse to one venue.
    #[test]
    fn arxiv_prefix_is_terminal(suffix in ".{0,30}") {
        prop_assert_eq!(canonicalize(&format!("{ARXIV_PREFIX}{suffix}")), "arXiv");
    }

    /// Digit-free input is only trimmed of trailing separators and whitespace.
    #[test]
    fn digit_free_input_is_trimmed(raw in "[A-Za-z .,:-]{0,40}") {
        prop_assume!(!raw.starts_with(ARXIV_PREFIX));
        let expected = raw
            .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | ':'))
            .trim();
        prop_assert_eq!(canonicalize(&raw), expected);
    }

    /// A canonical name is a fixed point.
    #[test]
    fn canonicalize_is_idempotent(raw in "[A-Za-z0-9 .,:()-]{0,60}") {
        let once = canonicalize(&raw);
        prop_assume!(!once.starts_with(ARXIV_PREFIX));
        prop_assert_eq!(canonicalize(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_digit()));
    }

    /// Retained publications are in the window; skipped ones are undated or old.
    #[test]
    fn recency_partitions_input(
        publications in proptest::collection::vec(arb_publication(), 0..20),
        current_year in 2000i32..2030,
    ) {
        let window = RecencyWindow::new(current_year);
        let recent = filter_recent(&publications, window).unwrap();

        for publication in &recent.publications {
            let year = publication.year.unwrap();
            prop_assert!(current_year - year <= 5);
        }

        let undated = publications.iter().filter(|p| p.year.is_none()).count();
        let old = publications.iter().filter(|p| p.year.is_some_and(|y| !window.contains(y))).count();
        prop_assert_eq!(recent.publications.len() + undated + old, publications.len());

        let counted: u32 = recent.venue_counts.values().sum();
        prop_assert!(counted as usize <= recent.publications.len());
    }

    /// The top paper has the maximum count and is its first occurrence.
    #[test]
    fn top_paper_is_first_maximum(publications in proptest::collection::vec(arb_publication(), 0..20)) {
        match select_top(&publications) {
            None => prop_assert!(publications.is_empty()),
            Some(top) => {
                let max = publications.iter().map(|p| p.citation_count).max().unwrap();
                let first = publications.iter().position(|p| p.citation_count == max).unwrap();
                prop_assert!(std::ptr::eq(top, &publications[first]));
            }
        }
    }

    /// Every co-author with a non-empty affiliation is one event, keyed verbatim.
    #[test]
    fn collaboration_events_match_counts(coauthors in proptest::collection::vec(arb_coauthor(), 0..20)) {
        let collaborations = track_collaborations(&coauthors);
        let total: u32 = collaborations.affiliation_counts.values().sum();
        prop_assert_eq!(total, collaborations.events);

        let affiliated = coauthors
            .iter()
            .filter(|c| c.affiliation.as_deref().is_some_and(|a| !a.is_empty()))
            .count();
        prop_assert_eq!(collaborations.events as usize, affiliated);
        prop_assert!(!collaborations.affiliation_counts.contains_key(""));
    }

    /// Batched merges agree with a single pass, in any order.
    #[test]
    fn merge_is_partition_independent(
        reports in proptest::collection::vec(arb_report(), 0..6),
        split in 0usize..6,
    ) {
        let split = split.min(reports.len());
        let whole = GlobalAggregate::from_reports(&reports);
        let left = GlobalAggregate::from_reports(&reports[..split]);
        let right = GlobalAggregate::from_reports(&reports[split..]);

        prop_assert_eq!(left.clone().merge(&right), whole.clone());
        prop_assert_eq!(right.merge(&left), whole);
    }
}
