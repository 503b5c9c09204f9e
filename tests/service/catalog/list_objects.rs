//! Tests for CatalogService::list_objects.
//!
//! Verifies the denormalized summary assembly: one row per object, star
//! detail columns, primary discovery selection, discoverer de-duplication,
//! and primary photo selection.

use chrono::NaiveDate;
use interstellar::{model::catalog::ObjectFilter, server::service::catalog::CatalogService};

use super::*;

/// One summary row per object, no matter how many discoveries and photos
/// the object has.
#[tokio::test]
async fn one_row_per_object() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test.catalog().insert_object("Vega", "Star", false).await?;
    test.catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1850, 1, 1))
        .await?;
    test.catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1900, 1, 1))
        .await?;
    test.catalog()
        .insert_photo(object.id, "https://img.test/a.jpg", None, false)
        .await?;
    test.catalog()
        .insert_photo(object.id, "https://img.test/b.jpg", None, true)
        .await?;

    let service = CatalogService::new(&test.db);
    let rows = service.list_objects(&ObjectFilter::default()).await.unwrap();

    assert_eq!(rows.len(), 1);

    Ok(())
}

/// The earliest dated discovery is the primary one; its date, method, and
/// discoverers appear on the summary row.
#[tokio::test]
async fn primary_discovery_is_earliest() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test
        .catalog()
        .insert_object("Neptune", "Planet", false)
        .await?;
    let earliest = test
        .catalog()
        .insert_discovery_with_method(
            object.id,
            NaiveDate::from_ymd_opt(1846, 9, 23),
            Some("Telescope"),
            None,
        )
        .await?;
    test.catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1900, 1, 1))
        .await?;
    // Undated discoveries sort after dated ones
    test.catalog().insert_discovery(object.id, None).await?;

    let galle = test.catalog().insert_discoverer("J. Galle").await?;
    test.catalog().link_discoverer(earliest.id, galle.id).await?;

    let service = CatalogService::new(&test.db);
    let rows = service.list_objects(&ObjectFilter::default()).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].discovery_date, NaiveDate::from_ymd_opt(1846, 9, 23));
    assert_eq!(rows[0].discovery_method.as_deref(), Some("Telescope"));
    assert_eq!(rows[0].discoverers.len(), 1);
    assert_eq!(rows[0].discoverers[0].name, "J. Galle");

    Ok(())
}

/// Star detail columns are populated for stars and None for other objects.
#[tokio::test]
async fn star_details_join_is_optional() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let star = test.catalog().insert_object("Sirius", "Star", false).await?;
    test.catalog()
        .insert_star_details(star.id, Some("A1V"), Some(25.4), Some(1.71))
        .await?;
    test.catalog()
        .insert_object("Andromeda", "Galaxy", false)
        .await?;

    let service = CatalogService::new(&test.db);
    let rows = service.list_objects(&ObjectFilter::default()).await.unwrap();

    assert_eq!(rows.len(), 2);
    // Name ascending: Andromeda before Sirius
    assert_eq!(rows[0].name, "Andromeda");
    assert!(rows[0].spectral_class.is_none());
    assert_eq!(rows[1].name, "Sirius");
    assert_eq!(rows[1].spectral_class.as_deref(), Some("A1V"));
    assert_eq!(rows[1].luminosity, Some(25.4));

    Ok(())
}

/// The primary photo is the flagged one; without a flag the most recent
/// photo wins.
#[tokio::test]
async fn primary_photo_prefers_flagged() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test
        .catalog()
        .insert_object("Whirlpool", "Galaxy", false)
        .await?;
    test.catalog()
        .insert_photo(
            object.id,
            "https://img.test/new.jpg",
            NaiveDate::from_ymd_opt(2024, 1, 1),
            false,
        )
        .await?;
    test.catalog()
        .insert_photo(
            object.id,
            "https://img.test/flagged.jpg",
            NaiveDate::from_ymd_opt(2001, 1, 1),
            true,
        )
        .await?;

    let service = CatalogService::new(&test.db);
    let rows = service.list_objects(&ObjectFilter::default()).await.unwrap();

    assert_eq!(
        rows[0].primary_photo_url.as_deref(),
        Some("https://img.test/flagged.jpg")
    );

    Ok(())
}

/// Filtered listing returns the matching subset, still one row per object.
#[tokio::test]
async fn filters_apply_to_summaries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog()
        .insert_object("Kepler-442b", "Planet", true)
        .await?;
    test.catalog()
        .insert_object("Kepler-452b", "Planet", false)
        .await?;
    test.catalog().insert_object("Vega", "Star", false).await?;

    let service = CatalogService::new(&test.db);
    let filter = ObjectFilter {
        habitable: Some(true),
        ..Default::default()
    };
    let rows = service.list_objects(&filter).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Kepler-442b");
    assert!(rows[0].is_habitable);

    Ok(())
}
