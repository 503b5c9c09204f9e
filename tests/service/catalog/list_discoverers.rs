//! Tests for CatalogService::list_discoverers.
//!
//! Verifies name ordering, distinct discovery counts, and the de-duplicated
//! object list per discoverer.

use chrono::NaiveDate;
use interstellar::server::service::catalog::CatalogService;

use super::*;

/// Discoverers come back sorted by name ascending with zeroed counts when
/// they have no discoveries.
#[tokio::test]
async fn sorted_by_name_with_zero_counts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    test.catalog().insert_discoverer("W. Herschel").await?;
    test.catalog().insert_discoverer("C. Messier").await?;

    let service = CatalogService::new(&test.db);
    let discoverers = service.list_discoverers().await.unwrap();

    let names: Vec<&str> = discoverers.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["C. Messier", "W. Herschel"]);
    assert_eq!(discoverers[0].total_discoveries, 0);
    assert!(discoverers[0].objects.is_empty());

    Ok(())
}

/// Two discoveries of the same object count as two discoveries but one
/// object.
#[tokio::test]
async fn object_list_is_deduplicated() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test
        .catalog()
        .insert_object("Uranus", "Planet", false)
        .await?;
    let first = test
        .catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1781, 3, 13))
        .await?;
    let second = test
        .catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1800, 1, 1))
        .await?;

    let herschel = test.catalog().insert_discoverer("W. Herschel").await?;
    test.catalog().link_discoverer(first.id, herschel.id).await?;
    test.catalog()
        .link_discoverer(second.id, herschel.id)
        .await?;

    let service = CatalogService::new(&test.db);
    let discoverers = service.list_discoverers().await.unwrap();

    assert_eq!(discoverers.len(), 1);
    assert_eq!(discoverers[0].total_discoveries, 2);
    assert_eq!(discoverers[0].objects.len(), 1);
    assert_eq!(discoverers[0].objects[0].object_name, "Uranus");

    Ok(())
}

/// A shared discovery credits every linked discoverer independently.
#[tokio::test]
async fn shared_discovery_credits_all_discoverers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let object = test
        .catalog()
        .insert_object("Neptune", "Planet", false)
        .await?;
    let discovery = test
        .catalog()
        .insert_discovery(object.id, NaiveDate::from_ymd_opt(1846, 9, 23))
        .await?;

    let galle = test.catalog().insert_discoverer("J. Galle").await?;
    let le_verrier = test.catalog().insert_discoverer("U. Le Verrier").await?;
    test.catalog().link_discoverer(discovery.id, galle.id).await?;
    test.catalog()
        .link_discoverer(discovery.id, le_verrier.id)
        .await?;

    let service = CatalogService::new(&test.db);
    let discoverers = service.list_discoverers().await.unwrap();

    assert_eq!(discoverers.len(), 2);
    for discoverer in &discoverers {
        assert_eq!(discoverer.total_discoveries, 1);
        assert_eq!(discoverer.objects.len(), 1);
        assert_eq!(discoverer.objects[0].object_name, "Neptune");
    }

    Ok(())
}
