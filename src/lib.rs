//! Interstellar: a read-only catalog browser for astronomical objects.
//!
//! The crate ships a dioxus fullstack application: the `server` module (behind
//! the `server` feature) exposes the catalog query API over axum + SeaORM,
//! the `client` module renders the dashboard (scatter chart, filterable list,
//! detail panel), and `model` holds the DTOs shared between the two.

pub mod client;
pub mod model;

#[cfg(feature = "server")]
pub mod server;
