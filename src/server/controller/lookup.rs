use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        manifest::{ContainerTypeDto, PavilionDto, ShipDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::lookup::LookupService,
    },
};

pub static LOOKUP_TAG: &str = "lookups";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupParams {
    /// Case-insensitive fragment to filter by
    pub search: Option<String>,
}

impl LookupParams {
    fn term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// List container types
#[utoipa::path(
    get,
    path = "/api/container-types/",
    tag = LOOKUP_TAG,
    params(LookupParams),
    responses(
        (status = 200, description = "Container types ordered by model", body = Vec<ContainerTypeDto>),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn container_types(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LookupParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let container_types = LookupService::new(&state.db, &state.media_url)
        .container_types(params.term())
        .await?;

    Ok(Json(container_types))
}

/// List ships with their flag
#[utoipa::path(
    get,
    path = "/api/ships/",
    tag = LOOKUP_TAG,
    params(LookupParams),
    responses(
        (status = 200, description = "Ships ordered by name", body = Vec<ShipDto>),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ships(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LookupParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let ships = LookupService::new(&state.db, &state.media_url)
        .ships(params.term())
        .await?;

    Ok(Json(ships))
}

/// List pavilions (ship flags)
#[utoipa::path(
    get,
    path = "/api/pavilions/",
    tag = LOOKUP_TAG,
    params(LookupParams),
    responses(
        (status = 200, description = "Pavilions ordered by name", body = Vec<PavilionDto>),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pavilions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LookupParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let pavilions = LookupService::new(&state.db, &state.media_url)
        .pavilions(params.term())
        .await?;

    Ok(Json(pavilions))
}
