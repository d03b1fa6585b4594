use httpmock::prelude::*;

use japflix::JfError;
use japflix::catalog::{CatalogSource, HttpSource, LoadOutcome, load};
use japflix::config::CatalogConfig;

const BODY: &str = r#"[
  {"title": "Spirited Away", "genres": [{"id": 16, "name": "Animation"}], "vote_average": 8.5},
  {"title": "Akira", "genres": ["Animation", "Science Fiction"], "vote_average": "8.1"}
]"#;

fn config_for(url: String) -> CatalogConfig {
    CatalogConfig {
        url,
        file: None,
    }
}

#[test]
fn fetches_catalog_with_single_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/movies-data.json")
            .header("accept", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(BODY);
    });

    let outcome = load(&config_for(server.url("/movies-data.json")));
    mock.assert_calls(1);

    let LoadOutcome::Loaded(catalog) = outcome else {
        panic!("expected a loaded catalog, got {outcome:?}");
    };
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.movies()[0].genres, vec!["Animation"]);
    assert_eq!(catalog.movies()[1].vote_average, Some(8.1));
}

#[test]
fn server_error_is_a_failed_load() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/movies-data.json");
        then.status(500).body("boom");
    });

    let outcome = load(&config_for(server.url("/movies-data.json")));
    // No retry.
    mock.assert_calls(1);

    let reason = outcome.failure_reason().unwrap().to_string();
    assert!(reason.contains("500"), "{reason}");
    assert!(outcome.into_catalog().is_empty());
}

#[test]
fn status_error_keeps_url_and_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone.json");
        then.status(404);
    });

    let source = HttpSource::new(server.url("/gone.json")).unwrap();
    match source.fetch() {
        Err(JfError::HttpStatus { url, status }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/gone.json"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_a_failed_load() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies-data.json");
        then.status(200).body("<html>not json</html>");
    });

    let outcome = load(&config_for(server.url("/movies-data.json")));
    assert!(matches!(outcome, LoadOutcome::Failed { .. }));
}

#[test]
fn non_array_document_is_a_failed_load() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/movies-data.json");
        then.status(200).body(r#"{"results": []}"#);
    });

    let outcome = load(&config_for(server.url("/movies-data.json")));
    assert!(outcome.failure_reason().unwrap().contains("object"));
}

#[test]
fn unreachable_host_is_a_failed_load() {
    // Port 9 (discard) on localhost is closed in test environments.
    let outcome = load(&config_for("http://127.0.0.1:9/movies.json".to_string()));
    let LoadOutcome::Failed { source, .. } = outcome else {
        panic!("expected failure");
    };
    assert_eq!(source, "http://127.0.0.1:9/movies.json");
}

#[test]
fn file_setting_wins_over_url() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body(BODY);
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local.json");
    std::fs::write(&path, r#"[{"title": "Local"}]"#).unwrap();

    let config = CatalogConfig {
        url: server.url("/movies-data.json"),
        file: Some(path),
    };
    let catalog = load(&config).into_catalog();

    mock.assert_calls(0);
    assert_eq!(catalog.movies()[0].title(), "Local");
}
