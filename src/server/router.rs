//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI is served at `/api/docs`. Unknown `/api` paths fall through
//! to a generic 404 body so client-side routes stay unaffected.

use axum::{routing::any, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `GET /api/objects` - List objects with optional type/habitable/search filters
/// - `GET /api/objects/{id}` - Object detail with photos, observations, discoveries
/// - `GET /api/discoverers` - Discoverers with discovery counts and linked objects
/// - `GET /api/observatories` - Observatories with observation/object counts
/// - `GET /api/stats` - Aggregate catalog counters
/// - `GET /api` - Service banner with endpoint list
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application
/// router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Interstellar", description = "Interstellar catalog API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Catalog query API routes"),
        (name = controller::meta::META_TAG, description = "Service metadata routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::get_objects))
        .routes(routes!(controller::catalog::get_object))
        .routes(routes!(controller::catalog::get_discoverers))
        .routes(routes!(controller::catalog::get_observatories))
        .routes(routes!(controller::catalog::get_stats))
        .routes(routes!(controller::meta::get_banner))
        .split_for_parts();

    let routes = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route(
            "/api/{*rest}",
            any(controller::meta::endpoint_not_found),
        );

    routes
}
