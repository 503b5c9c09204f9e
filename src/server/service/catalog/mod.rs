mod summary;

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{
        DiscoveredObjectDto, DiscovererDto, DiscovererRefDto, DiscoveryDto, ObjectDetailDto,
        ObjectFilter, ObjectSummaryDto, ObjectType, ObservationDto, ObservatoryDto, PhotoDto,
        StatsDto,
    },
    server::{
        data::catalog::{
            discoverer::DiscovererRepository, discovery::DiscoveryRepository,
            object::ObjectRepository, observation::ObservationRepository,
            observatory::ObservatoryRepository, photo::PhotoRepository,
        },
        error::{catalog::CatalogError, Error},
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List object summaries matching the filter, sorted by name ascending.
    ///
    /// Each row carries the object's star details (null columns for
    /// non-stars), its primary (earliest) discovery with a de-duplicated
    /// discoverer list, and its primary photo.
    pub async fn list_objects(&self, filter: &ObjectFilter) -> Result<Vec<ObjectSummaryDto>, Error> {
        let object_repo = ObjectRepository::new(self.db);

        let objects = object_repo.list(filter).await?;

        summary::build_summaries(self.db, objects).await
    }

    /// Get the full detail payload for one object.
    ///
    /// Returns [`CatalogError::ObjectNotFound`] when no object matches the
    /// id; the photo/observation/discovery collections are empty arrays when
    /// the object has no such records.
    pub async fn get_object_detail(&self, id: i32) -> Result<ObjectDetailDto, Error> {
        let object_repo = ObjectRepository::new(self.db);
        let discovery_repo = DiscoveryRepository::new(self.db);
        let observation_repo = ObservationRepository::new(self.db);
        let photo_repo = PhotoRepository::new(self.db);

        let object = object_repo
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::ObjectNotFound(id))?;

        let summary = summary::build_summaries(self.db, vec![object])
            .await?
            .into_iter()
            .next()
            .ok_or(CatalogError::ObjectNotFound(id))?;

        let (photos, observations, discoveries) = tokio::try_join!(
            photo_repo.get_by_object_ids_primary_first(vec![id]),
            observation_repo.get_by_object_id_latest_first(id),
            discovery_repo.get_by_object_id_latest_first(id),
        )?;

        let photos = photos
            .into_iter()
            .map(|photo| PhotoDto {
                id: photo.id,
                url: photo.url,
                caption: photo.caption,
                taken_date: photo.taken_date,
                telescope: photo.telescope,
                instrument: photo.instrument,
                wavelength_filter: photo.wavelength_filter,
                is_primary: photo.is_primary,
            })
            .collect();

        let observations = observations
            .into_iter()
            .filter_map(|(observation, observatory)| {
                // Every observation references exactly one observatory; a
                // missing join row would be an orphan and is not exposed.
                let observatory = observatory?;

                Some(ObservationDto {
                    id: observation.id,
                    observatory_name: observatory.name,
                    location: observatory.location,
                    country: observatory.country,
                    established_year: observatory.established_year,
                    observation_date: observation.observation_date,
                    instrument: observation.instrument,
                    wavelength: observation.wavelength,
                    exposure_time: observation.exposure_time,
                    notes: observation.notes,
                })
            })
            .collect();

        let discovery_ids: Vec<i32> = discoveries.iter().map(|d| d.id).collect();
        let links = discovery_repo.get_discoverer_links(discovery_ids).await?;

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

        let discoveries = discoveries
            .into_iter()
            .map(|discovery| DiscoveryDto {
                id: discovery.id,
                discovery_date: discovery.discovery_date,
                discovery_method: discovery.discovery_method,
                notes: discovery.notes,
                discoverers: discoverers_by_discovery
                    .remove(&discovery.id)
                    .unwrap_or_default(),
            })
            .collect();

        Ok(ObjectDetailDto {
            summary,
            photos,
            observations,
            discoveries,
        })
    }

    /// List discoverers sorted by name ascending, each with its distinct
    /// discovery count and a de-duplicated list of objects contributed to
    pub async fn list_discoverers(&self) -> Result<Vec<DiscovererDto>, Error> {
        let discoverer_repo = DiscovererRepository::new(self.db);
        let discovery_repo = DiscoveryRepository::new(self.db);
        let object_repo = ObjectRepository::new(self.db);

        let (discoverers, links, discoveries) = tokio::try_join!(
            discoverer_repo.list(),
            discoverer_repo.all_links(),
            discovery_repo.all(),
        )?;

        let object_by_discovery: HashMap<i32, i32> = discoveries
            .iter()
            .map(|discovery| (discovery.id, discovery.object_id))
            .collect();

        let object_ids: Vec<i32> = discoveries
            .iter()
            .map(|discovery| discovery.object_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let objects = object_repo.get_by_ids(object_ids).await?;
        let objects: HashMap<i32, &entity::astronomical_object::Model> =
            objects.iter().map(|object| (object.id, object)).collect();

        let mut links_by_discoverer: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in &links {
            links_by_discoverer
                .entry(link.discoverer_id)
                .or_default()
                .push(link.discovery_id);
        }

        let dtos = discoverers
            .into_iter()
            .map(|discoverer| {
                let discovery_ids = links_by_discoverer
                    .get(&discoverer.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();

                // Duplicate join rows must not inflate the count
                let distinct_discoveries: HashSet<i32> =
                    discovery_ids.iter().copied().collect();

                let mut seen_objects = HashSet::new();
                let mut object_refs = Vec::new();
                for discovery_id in discovery_ids {
                    let Some(object_id) = object_by_discovery.get(discovery_id) else {
                        continue;
                    };
                    if !seen_objects.insert(*object_id) {
                        continue;
                    }
                    if let Some(object) = objects.get(object_id) {
                        object_refs.push(DiscoveredObjectDto {
                            object_id: object.id,
                            object_name: object.name.clone(),
                            object_type: object.object_type.clone(),
                        });
                    }
                }

                DiscovererDto {
                    id: discoverer.id,
                    name: discoverer.name,
                    nationality: discoverer.nationality,
                    birth_year: discoverer.birth_year,
                    bio: discoverer.bio,
                    total_discoveries: distinct_discoveries.len() as u64,
                    objects: object_refs,
                }
            })
            .collect();

        Ok(dtos)
    }

    /// List observatories sorted by name ascending, each with its distinct
    /// observation count and the distinct count of objects observed
    pub async fn list_observatories(&self) -> Result<Vec<ObservatoryDto>, Error> {
        let observatory_repo = ObservatoryRepository::new(self.db);
        let observation_repo = ObservationRepository::new(self.db);

        let (observatories, observations) =
            tokio::try_join!(observatory_repo.list(), observation_repo.all())?;

        let mut observation_count: HashMap<i32, u64> = HashMap::new();
        let mut objects_observed: HashMap<i32, HashSet<i32>> = HashMap::new();

        for observation in &observations {
            *observation_count.entry(observation.observatory_id).or_default() += 1;
            objects_observed
                .entry(observation.observatory_id)
                .or_default()
                .insert(observation.object_id);
        }

        let dtos = observatories
            .into_iter()
            .map(|observatory| ObservatoryDto {
                total_observations: observation_count
                    .get(&observatory.id)
                    .copied()
                    .unwrap_or_default(),
                total_objects: objects_observed
                    .get(&observatory.id)
                    .map(|set| set.len() as u64)
                    .unwrap_or_default(),
                id: observatory.id,
                name: observatory.name,
                location: observatory.location,
                country: observatory.country,
                established_year: observatory.established_year,
                coordinates: observatory.coordinates,
            })
            .collect();

        Ok(dtos)
    }

    /// Aggregate catalog counters; all zero on an empty catalog
    pub async fn get_stats(&self) -> Result<StatsDto, Error> {
        let object_repo = ObjectRepository::new(self.db);
        let discoverer_repo = DiscovererRepository::new(self.db);
        let observatory_repo = ObservatoryRepository::new(self.db);

        let type_filter = |object_type: ObjectType| ObjectFilter {
            object_type: Some(object_type),
            ..Default::default()
        };
        let habitable_filter = ObjectFilter {
            habitable: Some(true),
            ..Default::default()
        };

        let total_objects = object_repo.count(&ObjectFilter::default()).await?;
        let total_stars = object_repo.count(&type_filter(ObjectType::Star)).await?;
        let total_planets = object_repo.count(&type_filter(ObjectType::Planet)).await?;
        let total_galaxies = object_repo.count(&type_filter(ObjectType::Galaxy)).await?;
        let total_habitable = object_repo.count(&habitable_filter).await?;
        let total_discoverers = discoverer_repo.count().await?;
        let total_observatories = observatory_repo.count().await?;

        Ok(StatsDto {
            total_objects,
            total_stars,
            total_planets,
            total_galaxies,
            total_habitable,
            total_discoverers,
            total_observatories,
        })
    }
}
