//! Service layer for catalog queries.
//!
//! Services compose repository calls into the denormalized payloads the API
//! returns: object summaries with their primary discovery and photo, full
//! detail aggregates, and the reference lists with derived counts.

pub mod catalog;
