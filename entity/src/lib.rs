pub mod prelude;

pub mod astronomical_object;
pub mod discoverer;
pub mod discovery;
pub mod discovery_discoverer;
pub mod observation;
pub mod observatory;
pub mod photo;
pub mod star_details;
