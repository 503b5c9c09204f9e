//! Tests for the service layer.
//!
//! These tests exercise the catalog service against an in-memory database,
//! asserting on the assembled DTOs rather than HTTP responses.

mod catalog;

use interstellar_test_utils::prelude::*;
