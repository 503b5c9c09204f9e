use axum::{http::StatusCode, response::IntoResponse};

use crate::model::api::{BannerDto, ErrorDto};

pub static META_TAG: &str = "meta";

/// Service banner listing the available endpoints
#[utoipa::path(
    get,
    path = "/api",
    tag = META_TAG,
    responses(
        (status = 200, description = "Service banner", body = BannerDto)
    ),
)]
pub async fn get_banner() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(BannerDto {
            message: "Interstellar backend is running".to_string(),
            endpoints: vec![
                "GET /api/objects".to_string(),
                "GET /api/objects/{id}".to_string(),
                "GET /api/discoverers".to_string(),
                "GET /api/observatories".to_string(),
                "GET /api/stats".to_string(),
            ],
        }),
    )
}

/// Generic 404 body for unknown API paths
pub async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        axum::Json(ErrorDto {
            error: "Endpoint not found".to_string(),
        }),
    )
}
