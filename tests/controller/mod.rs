//! Tests for HTTP controller endpoints.
//!
//! Integration tests for the API controllers, verifying request handling,
//! response formatting, and error handling by calling the handlers directly
//! against an in-memory database.

mod catalog;
mod meta;

use interstellar_test_utils::prelude::*;
