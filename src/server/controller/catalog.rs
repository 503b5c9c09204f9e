use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            DiscovererDto, ObjectDetailDto, ObjectFilter, ObjectSummaryDto, ObjectType,
            ObservatoryDto, StatsDto,
        },
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static CATALOG_TAG: &str = "catalog";

/// Raw list query parameters as they arrive on the wire
#[derive(Deserialize, IntoParams)]
pub struct ObjectsQuery {
    /// Exact object type match (`Star`, `Planet`, or `Galaxy`)
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    /// Habitability filter; only the literal `true` (case-insensitive)
    /// selects habitable objects, any other value selects non-habitable
    pub habitable: Option<String>,
    /// Case-insensitive substring match on the object name
    pub search: Option<String>,
}

impl ObjectsQuery {
    /// Coerce the raw strings into the typed filter.
    ///
    /// Returns `None` when a type value is present but unrecognized: the
    /// exact-match filter can then never match a row, so the caller
    /// short-circuits to an empty result.
    fn into_filter(self) -> Option<ObjectFilter> {
        let object_type = match self.object_type.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(ObjectType::parse(raw)?),
        };

        let habitable = match self.habitable.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.eq_ignore_ascii_case("true")),
        };

        let search = match self.search {
            None => None,
            Some(raw) if raw.is_empty() => None,
            Some(raw) => Some(raw),
        };

        Some(ObjectFilter {
            object_type,
            habitable,
            search,
        })
    }
}

/// List astronomical objects matching the supplied filters
#[utoipa::path(
    get,
    path = "/api/objects",
    tag = CATALOG_TAG,
    params(ObjectsQuery),
    responses(
        (status = 200, description = "Success when listing objects", body = Vec<ObjectSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_objects(
    State(state): State<AppState>,
    Query(query): Query<ObjectsQuery>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let Some(filter) = query.into_filter() else {
        // Unrecognized type value: an exact match can never succeed
        return Ok((StatusCode::OK, axum::Json(Vec::<ObjectSummaryDto>::new())).into_response());
    };

    let objects = catalog_service.list_objects(&filter).await?;

    Ok((StatusCode::OK, axum::Json(objects)).into_response())
}

/// Get the full detail payload for one object
#[utoipa::path(
    get,
    path = "/api/objects/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Astronomical object id")
    ),
    responses(
        (status = 200, description = "Success when retrieving object detail", body = ObjectDetailDto),
        (status = 404, description = "Object not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_object(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let detail = catalog_service.get_object_detail(id).await?;

    Ok((StatusCode::OK, axum::Json(detail)).into_response())
}

/// List discoverers with discovery counts and linked objects
#[utoipa::path(
    get,
    path = "/api/discoverers",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing discoverers", body = Vec<DiscovererDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discoverers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let discoverers = catalog_service.list_discoverers().await?;

    Ok((StatusCode::OK, axum::Json(discoverers)).into_response())
}

/// List observatories with observation and object counts
#[utoipa::path(
    get,
    path = "/api/observatories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing observatories", body = Vec<ObservatoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_observatories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let observatories = catalog_service.list_observatories().await?;

    Ok((StatusCode::OK, axum::Json(observatories)).into_response())
}

/// Get aggregate catalog statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when retrieving catalog stats", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let stats = catalog_service.get_stats().await?;

    Ok((StatusCode::OK, axum::Json(stats)).into_response())
}
