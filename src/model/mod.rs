//! Data transfer objects shared between the client and the server.

pub mod api;
pub mod catalog;
