//! Tests for CatalogService::get_object_detail.
//!
//! Verifies the not-found error, the always-present collections, and the
//! ordering rules for photos, observations, and discoveries.

use chrono::{NaiveDate, NaiveDateTime};
use interstellar::server::{
    error::{catalog::CatalogError, Error},
    service::catalog::CatalogService,
};

use super::*;

fn datetime(y: i32, m: u32, d: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).map(|date| date.and_hms_opt(12, 0, 0).unwrap())
}

/// An unknown id produces the object-not-found error.
#[tokio::test]
async fn unknown_id_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let service = CatalogService::new(&test.db);
    let result = service.get_object_detail(42).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::ObjectNotFound(42)))
    ));

    Ok(())
}

/// The collections are empty arrays, not missing, when the object has no
/// related records.
#[tokio::test]
async fn collections_default_to_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test.catalog().insert_object("Vega", "Star", false).await?;

    let service = CatalogService::new(&test.db);
    let detail = service.get_object_detail(object.id).await.unwrap();

    assert_eq!(detail.summary.name, "Vega");
    assert!(detail.photos.is_empty());
    assert!(detail.observations.is_empty());
    assert!(detail.discoveries.is_empty());

    Ok(())
}

/// Detail discoveries are ordered latest-first with undated rows last, and
/// each carries its own discoverer list.
#[tokio::test]
async fn discoveries_are_latest_first_with_discoverers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test
        .catalog()
        .insert_object("Uranus", "Planet", false)
        .await?;
    let old = test
        .catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1781, 3, 13))
        .await?;
    let recent = test
        .catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1850, 1, 1))
        .await?;
    let undated = test.catalog().insert_discovery(object.id, None).await?;

    let herschel = test.catalog().insert_discoverer("W. Herschel").await?;
    test.catalog().link_discoverer(old.id, herschel.id).await?;

    let service = CatalogService::new(&test.db);
    let detail = service.get_object_detail(object.id).await.unwrap();

    let ids: Vec<i32> = detail.discoveries.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![recent.id, old.id, undated.id]);
    assert!(detail.discoveries[0].discoverers.is_empty());
    assert_eq!(detail.discoveries[1].discoverers.len(), 1);
    assert_eq!(detail.discoveries[1].discoverers[0].name, "W. Herschel");

    Ok(())
}

/// Observations are ordered latest-first with undated rows last and carry
/// the flattened observatory columns.
#[tokio::test]
async fn observations_are_latest_first_with_observatory() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test.catalog().insert_object("M31", "Galaxy", false).await?;
    let palomar = test.catalog().insert_observatory("Palomar").await?;
    let keck = test.catalog().insert_observatory("Keck").await?;

    let undated = test
        .catalog()
        .insert_observation(object.id, palomar.id, None)
        .await?;
    let older = test
        .catalog()
        .insert_observation(object.id, palomar.id, datetime(2020, 5, 1))
        .await?;
    let newest = test
        .catalog()
        .insert_observation(object.id, keck.id, datetime(2024, 2, 1))
        .await?;

    let service = CatalogService::new(&test.db);
    let detail = service.get_object_detail(object.id).await.unwrap();

    let ids: Vec<i32> = detail.observations.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![newest.id, older.id, undated.id]);
    assert_eq!(detail.observations[0].observatory_name, "Keck");
    assert_eq!(detail.observations[1].observatory_name, "Palomar");

    Ok(())
}

/// Detail photos come primary-first, then latest taken date, undated last.
#[tokio::test]
async fn photos_are_primary_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test.catalog().insert_object("M51", "Galaxy", false).await?;
    let undated = test
        .catalog()
        .insert_photo(object.id, "https://img.test/a.jpg", None, false)
        .await?;
    let recent = test
        .catalog()
        .insert_photo(
            object.id,
            "https://img.test/b.jpg",
            NaiveDate::from_ymd_opt(2023, 8, 1),
            false,
        )
        .await?;
    let primary = test
        .catalog()
        .insert_photo(
            object.id,
            "https://img.test/c.jpg",
            NaiveDate::from_ymd_opt(2000, 1, 1),
            true,
        )
        .await?;

    let service = CatalogService::new(&test.db);
    let detail = service.get_object_detail(object.id).await.unwrap();

    let ids: Vec<i32> = detail.photos.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![primary.id, recent.id, undated.id]);
    assert!(detail.photos[0].is_primary);

    Ok(())
}

/// Related records of other objects never leak into the detail payload.
#[tokio::test]
async fn detail_is_scoped_to_the_object() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let target = test.catalog().insert_object("Vega", "Star", false).await?;
    let other = test.catalog().insert_object("Altair", "Star", false).await?;

    let observatory = test.catalog().insert_observatory("Palomar").await?;
    test.catalog()
        .insert_observation(other.id, observatory.id, datetime(2024, 1, 1))
        .await?;
    test.catalog()
        .insert_photo(other.id, "https://img.test/altair.jpg", None, true)
        .await?;
    test.catalog().insert_discovery(other.id, None).await?;

    let service = CatalogService::new(&test.db);
    let detail = service.get_object_detail(target.id).await.unwrap();

    assert!(detail.photos.is_empty());
    assert!(detail.observations.is_empty());
    assert!(detail.discoveries.is_empty());

    Ok(())
}
