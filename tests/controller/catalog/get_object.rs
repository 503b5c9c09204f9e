//! Tests for the get_object endpoint.
//!
//! Verifies detail retrieval for existing objects, the 404 response for
//! unknown ids, and error handling when the database is unavailable.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use interstellar::{model::catalog::ObjectDetailDto, server::controller::catalog::get_object};

use super::*;

/// Tests 200 response with the full detail payload.
///
/// Expected: Ok with 200 OK response carrying the object's fields
#[tokio::test]
async fn success_with_existing_object() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test
        .catalog()
        .insert_object("Proxima Centauri", "Star", false)
        .await?;

    let result = get_object(State(test.to_app_state()), Path(object.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let detail: ObjectDetailDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(detail.summary.name, "Proxima Centauri");
    assert!(detail.photos.is_empty());
    assert!(detail.observations.is_empty());
    assert!(detail.discoveries.is_empty());

    Ok(())
}

/// Tests 404 response for an id with no matching object.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_object(State(test.to_app_state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_object(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
