//! Error types for the registry server.
//!
//! Each domain has its own `thiserror` enum that knows how to render itself as an HTTP
//! response; [`Error`] aggregates them together with library errors so handlers can
//! propagate everything with `?`. Anything without a dedicated mapping becomes a logged
//! 500 with a generic message.

pub mod auth;
pub mod config;
pub mod registry;
pub mod search;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, registry::RegistryError, search::SearchError,
    },
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Manifest lookup error (validation, pagination, missing entries).
    #[error(transparent)]
    SearchError(#[from] SearchError),
    /// Staff write error (years, manifest entries).
    #[error(transparent)]
    RegistryError(#[from] RegistryError),
    /// A code path that should be unreachable was reached.
    #[error("Internal error, please report this as a bug: {0:?}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::SearchError(err) => err.into_response(),
            Self::RegistryError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Build a `{detail}` JSON response.
pub fn detail_response(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

/// Logs the wrapped error and answers with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
