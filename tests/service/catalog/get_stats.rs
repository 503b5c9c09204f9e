//! Tests for CatalogService::get_stats.

use interstellar::server::service::catalog::CatalogService;

use super::*;

/// Every counter is zero on an empty catalog.
#[tokio::test]
async fn empty_catalog_yields_zero_counters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let service = CatalogService::new(&test.db);
    let stats = service.get_stats().await.unwrap();

    assert_eq!(stats.total_objects, 0);
    assert_eq!(stats.total_stars, 0);
    assert_eq!(stats.total_planets, 0);
    assert_eq!(stats.total_galaxies, 0);
    assert_eq!(stats.total_habitable, 0);
    assert_eq!(stats.total_discoverers, 0);
    assert_eq!(stats.total_observatories, 0);

    Ok(())
}

/// The habitable counter is independent of the per-type counters.
#[tokio::test]
async fn habitable_count_spans_types() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog().insert_object("Sun", "Star", true).await?;
    test.catalog()
        .insert_object("Kepler-442b", "Planet", true)
        .await?;
    test.catalog()
        .insert_object("Kepler-452b", "Planet", false)
        .await?;

    let service = CatalogService::new(&test.db);
    let stats = service.get_stats().await.unwrap();

    assert_eq!(stats.total_objects, 3);
    assert_eq!(stats.total_stars, 1);
    assert_eq!(stats.total_planets, 2);
    assert_eq!(stats.total_galaxies, 0);
    assert_eq!(stats.total_habitable, 2);

    Ok(())
}
