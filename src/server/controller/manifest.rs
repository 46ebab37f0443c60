use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, Page},
        manifest::{ManifestEntryDto, NewManifestEntryDto},
    },
    server::{
        controller::util::{
            csrf::validate_csrf,
            get_user::{get_staff_from_session, get_user_from_session},
            page::into_page,
        },
        error::Error,
        model::app::AppState,
        service::manifest::{ManifestSearch, ManifestService},
    },
};

pub static MANIFEST_TAG: &str = "manifests";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Container number or container model fragment; at least 7 digits
    pub container: Option<String>,
    /// Manifest number fragment
    pub numar_manifest: Option<String>,
    /// Registration year, the active year when omitted
    pub year: Option<i32>,
    /// One-based page number
    pub page: Option<u64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Free text over manifest number, container, model and ship name
    pub search: Option<String>,
    /// One-based page number
    pub page: Option<u64>,
}

/// Search manifest entries by container and manifest number
///
/// # Responses
/// - 200 (Success): Page of entries ordered by running number
/// - 400 (Bad Request): Container term with fewer than 7 digits
/// - 403 (Forbidden): Not logged in
/// - 404 (Not Found): Page out of range
#[utoipa::path(
    get,
    path = "/api/manifests/search/",
    tag = MANIFEST_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching entries", body = Page<ManifestEntryDto>),
        (status = 400, description = "Container has fewer than 7 digits", body = ErrorDto),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let search = ManifestSearch {
        container: params.container,
        numar_manifest: params.numar_manifest,
        year: params.year,
    };

    let results = ManifestService::new(&state.db, &state.media_url)
        .search(search, params.page.unwrap_or(1), state.page_size)
        .await?;

    Ok(Json(into_page(results, &uri)))
}

/// List manifest entries, most recent registration first
///
/// # Responses
/// - 200 (Success): Page of entries
/// - 403 (Forbidden): Not logged in
/// - 404 (Not Found): Page out of range
#[utoipa::path(
    get,
    path = "/api/manifests/",
    tag = MANIFEST_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Entries", body = Page<ManifestEntryDto>),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let results = ManifestService::new(&state.db, &state.media_url)
        .list(params.search, params.page.unwrap_or(1), state.page_size)
        .await?;

    Ok(Json(into_page(results, &uri)))
}

/// Record a manifest entry
///
/// Staff only. The container is normalized and its model derived; the running number is
/// the current maximum plus one unless given; the year defaults to the active one. Missing
/// container types, flags and ships are created.
///
/// # Responses
/// - 201 (Created): The stored entry
/// - 400 (Bad Request): Container or manifest number missing
/// - 403 (Forbidden): Not logged in, not staff, or CSRF validation failed
/// - 404 (Not Found): The given year does not exist
#[utoipa::path(
    post,
    path = "/api/manifests/",
    tag = MANIFEST_TAG,
    request_body = NewManifestEntryDto,
    responses(
        (status = 201, description = "Entry recorded", body = ManifestEntryDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Year not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(entry): Json<NewManifestEntryDto>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &headers).await?;
    get_staff_from_session(&state, &session).await?;

    let entry = ManifestService::new(&state.db, &state.media_url)
        .record_entry(entry.into())
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Get a single manifest entry
///
/// # Responses
/// - 200 (Success): The entry
/// - 403 (Forbidden): Not logged in
/// - 404 (Not Found): No entry with this id
#[utoipa::path(
    get,
    path = "/api/manifests/{id}/",
    tag = MANIFEST_TAG,
    params(("id" = i32, Path, description = "Manifest entry id")),
    responses(
        (status = 200, description = "The entry", body = ManifestEntryDto),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let entry = ManifestService::new(&state.db, &state.media_url)
        .get(id)
        .await?;

    Ok(Json(entry))
}
