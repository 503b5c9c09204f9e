use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Catalog domain errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No astronomical object exists for the requested id.
    #[error("Object {0} not found")]
    ObjectNotFound(i32),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::ObjectNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Object not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
