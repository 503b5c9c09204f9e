//! Assembly of denormalized object summary rows.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{DiscovererRefDto, ObjectSummaryDto},
    server::{
        data::catalog::{
            discovery::DiscoveryRepository, object::ObjectRepository, photo::PhotoRepository,
        },
        error::Error,
    },
};

/// Collapse each object to exactly one summary row, preserving the order of
/// the input.
///
/// Star details, primary discoveries, and primary photos are fetched in
/// batches keyed by object id, so the row count stays constant no matter how
/// many discoveries or photos an object has.
pub async fn build_summaries(
    db: &DatabaseConnection,
    objects: Vec<entity::astronomical_object::Model>,
) -> Result<Vec<ObjectSummaryDto>, Error> {
    let object_repo = ObjectRepository::new(db);
    let discovery_repo = DiscoveryRepository::new(db);
    let photo_repo = PhotoRepository::new(db);

    let object_ids: Vec<i32> = objects.iter().map(|object| object.id).collect();

    let (star_details, discoveries, photos) = tokio::try_join!(
        object_repo.get_star_details(object_ids.clone()),
        discovery_repo.get_by_object_ids_earliest_first(object_ids.clone()),
        photo_repo.get_by_object_ids_primary_first(object_ids),
    )?;

    let star_details: HashMap<i32, entity::star_details::Model> = star_details
        .into_iter()
        .map(|details| (details.object_id, details))
        .collect();

    // Rows arrive earliest-first, so the first row per object is the primary
    // discovery.
    let mut primary_discovery: HashMap<i32, entity::discovery::Model> = HashMap::new();
    for discovery in discoveries {
        primary_discovery
            .entry(discovery.object_id)
            .or_insert(discovery);
    }

    // Same idea for photos: primary-first ordering makes the first row per
    // object the primary photo.
    let mut primary_photo: HashMap<i32, entity::photo::Model> = HashMap::new();
    for photo in photos {
        primary_photo.entry(photo.object_id).or_insert(photo);
    }

    let primary_discovery_ids: Vec<i32> = primary_discovery
        .values()
        .map(|discovery| discovery.id)
        .collect();
    let links = discovery_repo
        .get_discoverer_links(primary_discovery_ids)
        .await?;

    let mut discoverers_by_discovery: HashMap<i32, Vec<DiscovererRefDto>> = HashMap::new();
    let mut seen: HashSet<(i32, i32)> = HashSet::new();

    for (link, discoverer) in links {
        let Some(discoverer) = discoverer else {
            continue;
        };

        if !seen.insert((link.discovery_id, discoverer.id)) {
            continue;
        }

        discoverers_by_discovery
            .entry(link.discovery_id)
            .or_default()
            .push(DiscovererRefDto {
                id: discoverer.id,
                name: discoverer.name,
                nationality: discoverer.nationality,
                birth_year: discoverer.birth_year,
            });
    }

    let summaries = objects
        .into_iter()
        .map(|object| {
            let details = star_details.get(&object.id);
            let discovery = primary_discovery.get(&object.id);
            let photo = primary_photo.get(&object.id);

            let discoverers = discovery
                .and_then(|discovery| discoverers_by_discovery.get(&discovery.id))
                .cloned()
                .unwrap_or_default();

            ObjectSummaryDto {
                id: object.id,
                name: object.name,
                object_type: object.object_type,
                magnitude: object.magnitude,
                temperature_kelvin: object.temperature_kelvin,
                distance_light_years: object.distance_light_years,
                solar_mass: object.solar_mass,
                is_habitable: object.is_habitable,
                created_at: object.created_at,
                spectral_class: details.and_then(|d| d.spectral_class.clone()),
                luminosity: details.and_then(|d| d.luminosity),
                radius_solar: details.and_then(|d| d.radius_solar),
                discovery_date: discovery.and_then(|d| d.discovery_date),
                discovery_method: discovery.and_then(|d| d.discovery_method.clone()),
                discoverers,
                primary_photo_url: photo.map(|p| p.url.clone()),
                primary_photo_caption: photo.and_then(|p| p.caption.clone()),
            }
        })
        .collect();

    Ok(summaries)
}
