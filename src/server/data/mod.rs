//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for the catalog schema. Filters are
//! composed as typed `Condition` predicates; no SQL strings are ever built
//! from user input.

pub mod catalog;
