//! Tests for CatalogService::list_observatories.

use chrono::NaiveDate;
use interstellar::server::service::catalog::CatalogService;

use super::*;

fn datetime(y: i32, m: u32, d: u32) -> Option<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).map(|date| date.and_hms_opt(0, 0, 0).unwrap())
}

/// Observation totals count rows while object totals count distinct objects.
#[tokio::test]
async fn counts_distinguish_observations_from_objects() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let vega = test.catalog().insert_object("Vega", "Star", false).await?;
    let altair = test.catalog().insert_object("Altair", "Star", false).await?;
    let palomar = test.catalog().insert_observatory("Palomar").await?;

    test.catalog()
        .insert_observation(vega.id, palomar.id, datetime(2024, 1, 1))
        .await?;
    test.catalog()
        .insert_observation(vega.id, palomar.id, datetime(2024, 2, 1))
        .await?;
    test.catalog()
        .insert_observation(altair.id, palomar.id, datetime(2024, 3, 1))
        .await?;

    let service = CatalogService::new(&test.db);
    let observatories = service.list_observatories().await.unwrap();

    assert_eq!(observatories.len(), 1);
    assert_eq!(observatories[0].total_observations, 3);
    assert_eq!(observatories[0].total_objects, 2);

    Ok(())
}

/// Observatories without observations appear with zero counts, sorted by
/// name ascending.
#[tokio::test]
async fn idle_observatories_have_zero_counts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog().insert_observatory("Palomar").await?;
    test.catalog().insert_observatory("Keck").await?;

    let service = CatalogService::new(&test.db);
    let observatories = service.list_observatories().await.unwrap();

    let names: Vec<&str> = observatories.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Keck", "Palomar"]);
    assert_eq!(observatories[0].total_observations, 0);
    assert_eq!(observatories[0].total_objects, 0);

    Ok(())
}
