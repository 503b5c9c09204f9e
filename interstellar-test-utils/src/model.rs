//! Shorthand aliases for the catalog entity models used in fixtures and
//! assertions.

pub type ObjectModel = entity::astronomical_object::Model;
pub type StarDetailsModel = entity::star_details::Model;
pub type DiscoveryModel = entity::discovery::Model;
pub type DiscovererModel = entity::discoverer::Model;
pub type DiscoveryDiscovererModel = entity::discovery_discoverer::Model;
pub type ObservatoryModel = entity::observatory::Model;
pub type ObservationModel = entity::observation::Model;
pub type PhotoModel = entity::photo::Model;
