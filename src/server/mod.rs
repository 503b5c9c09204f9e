//! Server application core modules.
//!
//! This module contains all server-side functionality for the Interstellar
//! catalog browser: HTTP routing, the read-only catalog query endpoints,
//! database repositories, and startup/configuration plumbing. The catalog is
//! created and mutated externally; everything here is a read path.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
