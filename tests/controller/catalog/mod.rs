//! Tests for catalog controller endpoints.

mod get_discoverers;
mod get_object;
mod get_objects;
mod get_observatories;
mod get_stats;

use super::*;
