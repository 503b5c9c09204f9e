use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Kind of astronomical object held in the catalog.
///
/// Stored as a plain string in the database; parsed into this enum at the
/// API boundary so filters only ever match the recognized kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ObjectType {
    Star,
    Planet,
    Galaxy,
}

impl ObjectType {
    /// Parse a raw query/database value; `None` for unrecognized kinds
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Star" => Some(Self::Star),
            "Planet" => Some(Self::Planet),
            "Galaxy" => Some(Self::Galaxy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
            Self::Galaxy => "Galaxy",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discoverer reference embedded in summaries and discovery notes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DiscovererRefDto {
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
    pub birth_year: Option<i32>,
}

/// Denormalized object row returned by the list endpoint.
///
/// Star detail columns are `None` for non-star objects; the discovery columns
/// describe the primary (earliest) discovery and the photo columns the
/// primary photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ObjectSummaryDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub magnitude: Option<f64>,
    pub temperature_kelvin: Option<f64>,
    pub distance_light_years: Option<f64>,
    pub solar_mass: Option<f64>,
    pub is_habitable: bool,
    pub created_at: NaiveDateTime,
    pub spectral_class: Option<String>,
    pub luminosity: Option<f64>,
    pub radius_solar: Option<f64>,
    pub discovery_date: Option<NaiveDate>,
    pub discovery_method: Option<String>,
    pub discoverers: Vec<DiscovererRefDto>,
    pub primary_photo_url: Option<String>,
    pub primary_photo_caption: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PhotoDto {
    pub id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub taken_date: Option<NaiveDate>,
    pub telescope: Option<String>,
    pub instrument: Option<String>,
    pub wavelength_filter: Option<String>,
    pub is_primary: bool,
}

/// Observation joined with its observatory
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ObservationDto {
    pub id: i32,
    pub observatory_name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub established_year: Option<i32>,
    pub observation_date: Option<NaiveDateTime>,
    pub instrument: Option<String>,
    pub wavelength: Option<String>,
    pub exposure_time: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DiscoveryDto {
    pub id: i32,
    pub discovery_date: Option<NaiveDate>,
    pub discovery_method: Option<String>,
    pub notes: Option<String>,
    pub discoverers: Vec<DiscovererRefDto>,
}

/// Full object detail: the summary row plus every photo, observation,
/// and discovery. The collections are always present, empty when the object
/// has no such records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ObjectDetailDto {
    #[serde(flatten)]
    pub summary: ObjectSummaryDto,
    pub photos: Vec<PhotoDto>,
    pub observations: Vec<ObservationDto>,
    pub discoveries: Vec<DiscoveryDto>,
}

/// De-duplicated reference to an object a discoverer contributed to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DiscoveredObjectDto {
    pub object_id: i32,
    pub object_name: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DiscovererDto {
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
    pub total_discoveries: u64,
    pub objects: Vec<DiscoveredObjectDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ObservatoryDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub established_year: Option<i32>,
    pub coordinates: Option<String>,
    pub total_observations: u64,
    pub total_objects: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StatsDto {
    pub total_objects: u64,
    pub total_stars: u64,
    pub total_planets: u64,
    pub total_galaxies: u64,
    pub total_habitable: u64,
    pub total_discoverers: u64,
    pub total_observatories: u64,
}

/// Typed list filter, combined conjunctively. Absent fields impose no
/// constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectFilter {
    pub object_type: Option<ObjectType>,
    pub habitable: Option<bool>,
    pub search: Option<String>,
}
