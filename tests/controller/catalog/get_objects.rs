//! Tests for the get_objects endpoint.
//!
//! Verifies the list endpoint's filter handling, including conjunctive
//! filter composition, the empty result for unrecognized type values, and
//! error handling when the database is unavailable.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use interstellar::{
    model::catalog::ObjectSummaryDto,
    server::controller::catalog::{get_objects, ObjectsQuery},
};

use super::*;

fn query(
    object_type: Option<&str>,
    habitable: Option<&str>,
    search: Option<&str>,
) -> Query<ObjectsQuery> {
    Query(ObjectsQuery {
        object_type: object_type.map(str::to_string),
        habitable: habitable.map(str::to_string),
        search: search.map(str::to_string),
    })
}

async fn response_objects(resp: axum::response::Response) -> Vec<ObjectSummaryDto> {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Tests 200 response with an empty list on an empty catalog.
///
/// Expected: Ok with 200 OK response and zero rows
#[tokio::test]
async fn success_with_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_objects(State(test.to_app_state()), query(None, None, None)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(response_objects(resp).await.is_empty());

    Ok(())
}

/// Tests that all filters must match for a row to be returned.
///
/// Expected: Ok with 200 OK response containing only the fully matching row
#[tokio::test]
async fn success_filters_combine_conjunctively() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog()
        .insert_object("Planet Geonazi", "Planet", true)
        .await?;
    test.catalog()
        .insert_object("Planet Geox", "Planet", false)
        .await?;
    test.catalog()
        .insert_object("Georgium Sidus", "Star", true)
        .await?;

    let result = get_objects(
        State(test.to_app_state()),
        query(Some("Planet"), Some("true"), Some("geo")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let objects = response_objects(resp).await;
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name, "Planet Geonazi");

    Ok(())
}

/// Tests that an unrecognized type value yields an empty 200 list rather
/// than an error.
///
/// Expected: Ok with 200 OK response and zero rows
#[tokio::test]
async fn success_with_empty_list_for_unknown_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog()
        .insert_object("Proxima Centauri", "Star", false)
        .await?;

    let result = get_objects(
        State(test.to_app_state()),
        query(Some("Comet"), None, None),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(response_objects(resp).await.is_empty());

    Ok(())
}

/// Tests that empty filter values impose no constraint.
///
/// Expected: Ok with 200 OK response containing every row
#[tokio::test]
async fn success_with_blank_filter_values() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog()
        .insert_object("Andromeda", "Galaxy", false)
        .await?;
    test.catalog().insert_object("Vega", "Star", false).await?;

    let result = get_objects(
        State(test.to_app_state()),
        query(Some(""), Some(""), Some("")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response_objects(resp).await.len(), 2);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_objects(State(test.to_app_state()), query(None, None, None)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
