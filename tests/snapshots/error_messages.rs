use insta::assert_snapshot;

use japflix::error::{JfError, StructuredError};

#[test]
fn test_error_http_status() {
    let err = JfError::HttpStatus {
        url: "https://example.test/movies.json".to_string(),
        status: 503,
    };
    assert_snapshot!(err.to_string(), @"HTTP 503 fetching https://example.test/movies.json");
}

#[test]
fn test_error_catalog_shape() {
    let err = JfError::CatalogShape {
        found: "object".to_string(),
    };
    assert_snapshot!(err.to_string(), @"Catalog is not a JSON array (found object)");
}

#[test]
fn test_error_not_found() {
    let err = JfError::NotFound("no result at index 3 for query 'her' (1 results)".to_string());
    assert_snapshot!(
        StructuredError::from(&err).to_string(),
        @"[E901] Not found: no result at index 3 for query 'her' (1 results)"
    );
}

#[test]
fn test_error_terminal() {
    let err = JfError::Terminal("browse requires an interactive terminal".to_string());
    assert_snapshot!(
        StructuredError::from(&err).to_string(),
        @"[E701] Terminal error: browse requires an interactive terminal"
    );
}
