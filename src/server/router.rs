//! HTTP routing and OpenAPI documentation.
//!
//! Every API endpoint is registered here together with its utoipa path docs; the
//! collected document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI mounted at `/api/docs`.
///
/// # Registered Endpoints
/// - `GET /api/csrf/`, `POST /api/login/`, `POST /api/logout/`, `GET /api/check-auth/`
/// - `GET /api/manifests/`, `GET /api/manifests/search/`, `GET /api/manifests/{id}/`
/// - `POST /api/manifests/` (staff)
/// - `GET /api/years/`, `GET /api/latest-manifest/`
/// - `POST /api/years/`, `POST /api/years/{id}/activate/` (staff)
/// - `GET /api/container-types/`, `GET /api/ships/`, `GET /api/pavilions/`
///
/// ```ignore
/// let router = routes().with_state(AppState::new(db, &config)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Registru", description = "Import manifest registry API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::manifest::MANIFEST_TAG, description = "Manifest search API routes"),
        (name = controller::year::YEAR_TAG, description = "Registry year API routes"),
        (name = controller::lookup::LOOKUP_TAG, description = "Reference table API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::csrf))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::check_auth))
        .routes(routes!(controller::manifest::list, controller::manifest::create))
        .routes(routes!(controller::manifest::search))
        .routes(routes!(controller::manifest::get))
        .routes(routes!(controller::year::years, controller::year::create_year))
        .routes(routes!(controller::year::activate_year))
        .routes(routes!(controller::year::latest_manifest))
        .routes(routes!(controller::lookup::container_types))
        .routes(routes!(controller::lookup::ships))
        .routes(routes!(controller::lookup::pavilions))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
