use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration problems, read from the environment or `.env`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingEnvVar(&'static str),
    #[error("{var}={value:?} is not valid: {reason}")]
    InvalidEnvValue {
        var: &'static str,
        value: String,
        reason: String,
    },
    /// Only one of `ADMIN_USERNAME` and `ADMIN_PASSWORD` is set.
    #[error("ADMIN_USERNAME and ADMIN_PASSWORD must be set together, only {0} is present")]
    IncompleteAdminCredentials(&'static str),
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
