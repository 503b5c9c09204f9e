//! Tests for the get_stats endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use interstellar::{model::catalog::StatsDto, server::controller::catalog::get_stats};

use super::*;

async fn response_stats(resp: axum::response::Response) -> StatsDto {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Tests that every counter is zero on an empty catalog.
///
/// Expected: Ok with 200 OK response and all-zero counters
#[tokio::test]
async fn success_with_zero_counts_on_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_stats(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stats = response_stats(resp).await;
    assert_eq!(stats.total_objects, 0);
    assert_eq!(stats.total_stars, 0);
    assert_eq!(stats.total_planets, 0);
    assert_eq!(stats.total_galaxies, 0);
    assert_eq!(stats.total_habitable, 0);
    assert_eq!(stats.total_discoverers, 0);
    assert_eq!(stats.total_observatories, 0);

    Ok(())
}

/// Tests that the counters reflect the stored rows per type and habitability.
///
/// Expected: Ok with 200 OK response and matching counts
#[tokio::test]
async fn success_with_populated_counts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog().insert_object("Vega", "Star", false).await?;
    test.catalog()
        .insert_object("Kepler-442b", "Planet", true)
        .await?;
    test.catalog()
        .insert_object("Andromeda", "Galaxy", false)
        .await?;
    test.catalog().insert_discoverer("W. Herschel").await?;
    test.catalog().insert_observatory("Palomar").await?;

    let result = get_stats(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stats = response_stats(resp).await;
    assert_eq!(stats.total_objects, 3);
    assert_eq!(stats.total_stars, 1);
    assert_eq!(stats.total_planets, 1);
    assert_eq!(stats.total_galaxies, 1);
    assert_eq!(stats.total_habitable, 1);
    assert_eq!(stats.total_discoverers, 1);
    assert_eq!(stats.total_observatories, 1);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_stats(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
