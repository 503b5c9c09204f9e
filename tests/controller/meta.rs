//! Tests for the service banner and the API 404 fallback.

use axum::{http::StatusCode, response::IntoResponse};
use interstellar::{
    model::api::{BannerDto, ErrorDto},
    server::controller::meta::{endpoint_not_found, get_banner},
};

/// Tests that the banner lists every API endpoint.
///
/// Expected: 200 OK response naming all five endpoints
#[tokio::test]
async fn banner_lists_endpoints() {
    let resp = get_banner().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let banner: BannerDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(banner.endpoints.len(), 5);
    assert!(banner
        .endpoints
        .iter()
        .any(|endpoint| endpoint.contains("/api/objects")));
    assert!(banner
        .endpoints
        .iter()
        .any(|endpoint| endpoint.contains("/api/stats")));
}

/// Tests the JSON 404 body for unknown API paths.
///
/// Expected: 404 NOT_FOUND response with an error message
#[tokio::test]
async fn unknown_path_returns_json_404() {
    let resp = endpoint_not_found().await.into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Endpoint not found");
}
