use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        manifest::{CreateYearRequest, ManifestEntryDto, YearDto},
    },
    server::{
        controller::{
            manifest::MANIFEST_TAG,
            util::{
                csrf::validate_csrf,
                get_user::{get_staff_from_session, get_user_from_session},
            },
        },
        error::Error,
        model::app::AppState,
        service::{manifest::ManifestService, year::YearService},
    },
};

pub static YEAR_TAG: &str = "years";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LatestParams {
    /// Registration year, the active year when omitted
    pub year: Option<i32>,
}

/// List registry years, newest first
///
/// Public so the login screen can prepare the year picker.
#[utoipa::path(
    get,
    path = "/api/years/",
    tag = YEAR_TAG,
    responses(
        (status = 200, description = "Registry years", body = Vec<YearDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn years(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let years = YearService::new(&state.db).list().await?;

    Ok(Json(years))
}

/// Create a registry year
///
/// Staff only. The year starts inactive unless `is_active` is set, in which case every
/// other year is deactivated.
///
/// # Responses
/// - 201 (Created): The new year
/// - 400 (Bad Request): Year outside the accepted range
/// - 403 (Forbidden): Not logged in, not staff, or CSRF validation failed
/// - 409 (Conflict): The year already exists
#[utoipa::path(
    post,
    path = "/api/years/",
    tag = YEAR_TAG,
    request_body = CreateYearRequest,
    responses(
        (status = 201, description = "Year created", body = YearDto),
        (status = 400, description = "Invalid year", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 409, description = "Year already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_year(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(request): Json<CreateYearRequest>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;
    get_staff_from_session(&state, &session).await?;

    let year = YearService::new(&state.db)
        .create(request.year, request.is_active)
        .await?;

    Ok((StatusCode::CREATED, Json(year)))
}

/// Make a registry year the only active one
///
/// # Responses
/// - 200 (Success): The activated year
/// - 403 (Forbidden): Not logged in, not staff, or CSRF validation failed
/// - 404 (Not Found): No year with this id
#[utoipa::path(
    post,
    path = "/api/years/{id}/activate/",
    tag = YEAR_TAG,
    params(("id" = i32, Path, description = "Registry year id")),
    responses(
        (status = 200, description = "Year activated", body = YearDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Year not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn activate_year(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;
    get_staff_from_session(&state, &session).await?;

    let year = YearService::new(&state.db).activate(id).await?;

    Ok(Json(year))
}

/// Latest registered manifest entry of a year
///
/// # Responses
/// - 200 (Success): Entry with the highest running number
/// - 403 (Forbidden): Not logged in
/// - 404 (Not Found): The year has no entries
#[utoipa::path(
    get,
    path = "/api/latest-manifest/",
    tag = MANIFEST_TAG,
    params(LatestParams),
    responses(
        (status = 200, description = "Latest entry", body = ManifestEntryDto),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No entries for the year", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn latest_manifest(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LatestParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let entry = ManifestService::new(&state.db, &state.media_url)
        .latest(params.year)
        .await?;

    Ok(Json(entry))
}
