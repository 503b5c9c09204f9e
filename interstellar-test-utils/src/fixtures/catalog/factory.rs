//! Insertion helpers for catalog records.
//!
//! Each helper inserts one row with standard test values for the fields the
//! caller does not control, and returns the stored model.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, Set};

use crate::{
    fixtures::catalog::CatalogFixtures,
    model::{
        DiscovererModel, DiscoveryDiscovererModel, DiscoveryModel, ObjectModel, ObservationModel,
        ObservatoryModel, PhotoModel, StarDetailsModel,
    },
    TestError,
};

impl<'a> CatalogFixtures<'a> {
    /// Insert an astronomical object with no measurements
    pub async fn insert_object(
        &self,
        name: &str,
        object_type: &str,
        is_habitable: bool,
    ) -> Result<ObjectModel, TestError> {
        self.insert_object_with_metrics(name, object_type, is_habitable, None, None, None)
            .await
    }

    /// Insert an astronomical object with magnitude, distance, and mass
    pub async fn insert_object_with_metrics(
        &self,
        name: &str,
        object_type: &str,
        is_habitable: bool,
        magnitude: Option<f64>,
        distance_light_years: Option<f64>,
        solar_mass: Option<f64>,
    ) -> Result<ObjectModel, TestError> {
        let object = entity::astronomical_object::ActiveModel {
            name: Set(name.to_string()),
            object_type: Set(object_type.to_string()),
            magnitude: Set(magnitude),
            temperature_kelvin: Set(None),
            distance_light_years: Set(distance_light_years),
            solar_mass: Set(solar_mass),
            is_habitable: Set(is_habitable),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(object.insert(&self.context.db).await?)
    }

    pub async fn insert_star_details(
        &self,
        object_id: i32,
        spectral_class: Option<&str>,
        luminosity: Option<f64>,
        radius_solar: Option<f64>,
    ) -> Result<StarDetailsModel, TestError> {
        let details = entity::star_details::ActiveModel {
            object_id: Set(object_id),
            spectral_class: Set(spectral_class.map(str::to_string)),
            luminosity: Set(luminosity),
            radius_solar: Set(radius_solar),
            ..Default::default()
        };

        Ok(details.insert(&self.context.db).await?)
    }

    pub async fn insert_discovery(
        &self,
        object_id: i32,
        discovery_date: Option<NaiveDate>,
    ) -> Result<DiscoveryModel, TestError> {
        self.insert_discovery_with_method(object_id, discovery_date, None, None)
            .await
    }

    pub async fn insert_discovery_with_method(
        &self,
        object_id: i32,
        discovery_date: Option<NaiveDate>,
        discovery_method: Option<&str>,
        notes: Option<&str>,
    ) -> Result<DiscoveryModel, TestError> {
        let discovery = entity::discovery::ActiveModel {
            object_id: Set(object_id),
            discovery_date: Set(discovery_date),
            discovery_method: Set(discovery_method.map(str::to_string)),
            notes: Set(notes.map(str::to_string)),
            ..Default::default()
        };

        Ok(discovery.insert(&self.context.db).await?)
    }

    pub async fn insert_discoverer(&self, name: &str) -> Result<DiscovererModel, TestError> {
        let discoverer = entity::discoverer::ActiveModel {
            name: Set(name.to_string()),
            nationality: Set(Some("Test Nationality".to_string())),
            birth_year: Set(Some(1900)),
            bio: Set(None),
            ..Default::default()
        };

        Ok(discoverer.insert(&self.context.db).await?)
    }

    /// Credit a discoverer on a discovery
    pub async fn link_discoverer(
        &self,
        discovery_id: i32,
        discoverer_id: i32,
    ) -> Result<DiscoveryDiscovererModel, TestError> {
        let link = entity::discovery_discoverer::ActiveModel {
            discovery_id: Set(discovery_id),
            discoverer_id: Set(discoverer_id),
            ..Default::default()
        };

        Ok(link.insert(&self.context.db).await?)
    }

    pub async fn insert_observatory(&self, name: &str) -> Result<ObservatoryModel, TestError> {
        let observatory = entity::observatory::ActiveModel {
            name: Set(name.to_string()),
            location: Set(Some("Test Location".to_string())),
            country: Set(Some("Test Country".to_string())),
            established_year: Set(Some(1950)),
            coordinates: Set(None),
            ..Default::default()
        };

        Ok(observatory.insert(&self.context.db).await?)
    }

    pub async fn insert_observation(
        &self,
        object_id: i32,
        observatory_id: i32,
        observation_date: Option<NaiveDateTime>,
    ) -> Result<ObservationModel, TestError> {
        let observation = entity::observation::ActiveModel {
            object_id: Set(object_id),
            observatory_id: Set(observatory_id),
            observation_date: Set(observation_date),
            instrument: Set(Some("Test Instrument".to_string())),
            wavelength: Set(None),
            exposure_time: Set(Some(300.0)),
            notes: Set(None),
            ..Default::default()
        };

        Ok(observation.insert(&self.context.db).await?)
    }

    pub async fn insert_photo(
        &self,
        object_id: i32,
        url: &str,
        taken_date: Option<NaiveDate>,
        is_primary: bool,
    ) -> Result<PhotoModel, TestError> {
        let photo = entity::photo::ActiveModel {
            object_id: Set(object_id),
            url: Set(url.to_string()),
            caption: Set(None),
            taken_date: Set(taken_date),
            telescope: Set(None),
            instrument: Set(None),
            wavelength_filter: Set(None),
            is_primary: Set(is_primary),
            ..Default::default()
        };

        Ok(photo.insert(&self.context.db).await?)
    }
}
