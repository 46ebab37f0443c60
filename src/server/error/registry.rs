use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::detail_response;

/// Failures of staff write operations on years and manifest entries.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Year {0} is outside the accepted range")]
    InvalidYear(i32),
    #[error("Year {0} already exists")]
    DuplicateYear(i32),
    #[error("Registry year with id {0} not found")]
    YearNotFound(i32),
    #[error("Required field {0:?} is empty")]
    MissingField(&'static str),
    #[error("User {0:?} is not staff")]
    NotStaff(String),
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::InvalidYear(_) => {
                detail_response(StatusCode::BAD_REQUEST, "Anul trebuie să fie un număr valid.")
            }
            Self::DuplicateYear(year) => detail_response(
                StatusCode::CONFLICT,
                &format!("Anul {year} există deja în baza de date."),
            ),
            Self::YearNotFound(_) => detail_response(StatusCode::NOT_FOUND, "Not found."),
            Self::MissingField(field) => detail_response(
                StatusCode::BAD_REQUEST,
                &format!("Câmpul {field} este obligatoriu."),
            ),
            Self::NotStaff(_) => detail_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
        }
    }
}
