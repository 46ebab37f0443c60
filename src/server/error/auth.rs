use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::detail_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("CSRF token in request does not match the session")]
    CsrfValidationFailed,
    #[error("No CSRF token present in session")]
    CsrfMissingValue,
    #[error("Login attempted without a username or password")]
    MissingCredentials,
    #[error("Invalid credentials for user {0:?}")]
    InvalidCredentials(String),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                detail_response(
                    StatusCode::FORBIDDEN,
                    "Authentication credentials were not provided.",
                )
            }
            Self::CsrfValidationFailed | Self::CsrfMissingValue => {
                tracing::debug!("{}", self);

                detail_response(
                    StatusCode::FORBIDDEN,
                    "CSRF Failed: CSRF token missing or incorrect.",
                )
            }
            Self::MissingCredentials => {
                detail_response(StatusCode::BAD_REQUEST, "Username și password sunt obligatorii")
            }
            Self::InvalidCredentials(ref username) => {
                tracing::debug!(username = %username, "Failed login attempt");

                detail_response(StatusCode::UNAUTHORIZED, "Credențiale invalide")
            }
            Self::PasswordHash(_) => crate::server::error::InternalServerError(self).into_response(),
        }
    }
}
