//! Test fixture modules for database record creation.
//!
//! Fixtures insert catalog records with sensible defaults so tests only
//! spell out the fields they assert on.

pub mod catalog;
