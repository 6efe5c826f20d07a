//! Mock-based tests for the Semantic Scholar profile source using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_digest::client::SemanticScholarClient;
use scholar_digest::config::Config;
use scholar_digest::error::{ClientError, FetchFault};
use scholar_digest::{AggregationEngine, ProfileCandidate, ProfileSource, RecencyWindow};

const YEAR: i32 = 2025;

/// Create a client pointed at the mock server.
fn setup_client(mock_server: &MockServer) -> SemanticScholarClient {
    let config = Config::for_testing(&mock_server.uri());
    SemanticScholarClient::new(config).unwrap().with_window(RecencyWindow::new(YEAR))
}

fn sample_paper(id: &str, title: &str, year: i32, citations: i32, authors: serde_json::Value) -> serde_json::Value {
    json!({
        "paperId": id,
        "title": title,
        "year": year,
        "venue": "Test Conference",
        "journal": {"name": "Test Journal", "volume": "12", "pages": "100-110"},
        "citationCount": citations,
        "authors": authors
    })
}

async fn mount_profile(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .and(query_param("query", "Jane Smith"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "data": [
                {"authorId": "a1", "name": "Jane Q. Smith"},
                {"authorId": "a9", "name": "Jane Smithson"}
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorId": "a1",
            "name": "Jane Q. Smith",
            "citationCount": 500
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/a1/papers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "next": null,
            "data": [
                sample_paper("p1", "Recent Work", 2024, 40, json!([
                    {"authorId": "a1", "name": "Jane Q. Smith"},
                    {"authorId": "c1", "name": "Carl"}
                ])),
                sample_paper("p2", "Classic Work", 2001, 400, json!([
                    {"authorId": "c2", "name": "Dana"},
                    {"authorId": "a1", "name": "Jane Q. Smith"},
                    {"authorId": "c1", "name": "Carl"},
                    {"authorId": null, "name": "Unresolved"}
                ])),
                {"paperId": "p3", "title": "Undated Note", "citationCount": 1, "authors": []}
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graph/v1/author/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"authorId": "c1", "name": "Carl", "affiliations": ["Acme University", "Other"]},
            {"authorId": "c2", "name": "Dana", "affiliations": []}
        ])))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_search_picks_first_hit() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server).await;

    let client = setup_client(&mock_server);
    let candidate = client.search("Jane Smith").await.unwrap().unwrap();

    assert_eq!(candidate.id, "a1");
    assert_eq!(candidate.query_name, "Jane Smith");
    assert_eq!(candidate.display_name.as_deref(), Some("Jane Q. Smith"));
}

#[tokio::test]
async fn test_search_without_hits() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "data": []})))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    assert!(client.search("Nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_fill_builds_profile() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server).await;

    let client = setup_client(&mock_server);
    let profile = client.fill(ProfileCandidate::new("a1", "Jane Smith")).await.unwrap();

    assert_eq!(profile.query_name, "Jane Smith");
    assert_eq!(profile.display_name.as_deref(), Some("Jane Q. Smith"));
    assert_eq!(profile.total_citations, 500);
    // Only the 2024 paper falls inside the window.
    assert_eq!(profile.recent_citations, 40);

    assert_eq!(profile.publications.len(), 3);
    assert_eq!(profile.publications[0].venue.as_deref(), Some("Test Journal 12, 100-110"));
    assert_eq!(profile.publications[2].year, None);

    let coauthors: Vec<_> =
        profile.coauthors.iter().map(|c| (c.name.as_str(), c.affiliation.as_deref())).collect();
    assert_eq!(coauthors, [("Carl", Some("Acme University")), ("Dana", None)]);
}

#[tokio::test]
async fn test_fill_follows_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authorId": "a2", "name": "Paged"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/a2/papers"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "next": 1,
            "data": [sample_paper("p1", "First", 2024, 1, json!([]))]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/a2/papers"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 1,
            "data": [sample_paper("p2", "Second", 2023, 2, json!([]))]
        })))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let profile = client.fill(ProfileCandidate::new("a2", "Paged")).await.unwrap();

    let titles: Vec<_> = profile.publications.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second"]);
    assert!(profile.coauthors.is_empty());
}

#[tokio::test]
async fn test_rate_limit_is_a_fetch_fault() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search("Jane Smith").await.unwrap_err();

    assert!(matches!(err, FetchFault::Lookup(ClientError::RateLimited { .. })));
}

#[tokio::test]
async fn test_server_error_maps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/a1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.fill(ProfileCandidate::new("a1", "Jane Smith")).await.unwrap_err();

    assert!(matches!(err, FetchFault::Lookup(ClientError::Server { status: 502, .. })));
}

#[tokio::test]
async fn test_engine_over_mock_api() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .and(query_param("query", "Broken Author"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let engine = AggregationEngine::new(&client, RecencyWindow::new(YEAR));
    let aggregation = engine
        .process(&["Broken Author".to_string(), "Jane Smith".to_string()])
        .await;

    let broken = &aggregation.authors[0];
    assert_eq!(broken.total_citations, 0);
    assert_eq!(broken.top_paper, "N/A");

    let jane = &aggregation.authors[1];
    assert_eq!(jane.total_citations, 500);
    assert_eq!(jane.top_paper, "Classic Work");
    assert_eq!(jane.venue_counts["Test Journal"], 1);
    assert_eq!(jane.affiliation_counts["Acme University"], 1);

    assert_eq!(aggregation.global.total_citations, 500);
    assert_eq!(aggregation.global.collaboration_events, 1);
}
