pub use super::astronomical_object::Entity as AstronomicalObject;
pub use super::discoverer::Entity as Discoverer;
pub use super::discovery::Entity as Discovery;
pub use super::discovery_discoverer::Entity as DiscoveryDiscoverer;
pub use super::observation::Entity as Observation;
pub use super::observatory::Entity as Observatory;
pub use super::photo::Entity as Photo;
pub use super::star_details::Entity as StarDetails;
