//! Tests for the catalog service operations.

mod get_object_detail;
mod get_stats;
mod list_discoverers;
mod list_objects;
mod list_observatories;

use super::*;
