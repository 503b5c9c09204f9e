//! Tests for the get_discoverers endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use interstellar::{model::catalog::DiscovererDto, server::controller::catalog::get_discoverers};

use super::*;

/// Tests 200 response listing every discoverer.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_discoverers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog().insert_discoverer("W. Herschel").await?;
    test.catalog().insert_discoverer("C. Messier").await?;

    let result = get_discoverers(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let discoverers: Vec<DiscovererDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(discoverers.len(), 2);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_discoverers(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
