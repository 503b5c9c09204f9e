//! Repositories for the catalog schema.

pub mod discoverer;
pub mod discovery;
pub mod object;
pub mod observation;
pub mod observatory;
pub mod photo;
