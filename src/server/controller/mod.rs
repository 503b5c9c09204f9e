//! HTTP controller endpoints for the Interstellar catalog API.
//!
//! Controllers validate query input at the boundary (typed filters instead of
//! raw strings), call into the catalog service, and map results to HTTP
//! responses. All endpoints are read-only and documented with utoipa.

pub mod catalog;
pub mod meta;
