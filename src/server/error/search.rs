use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::container::CONTAINER_TOO_SHORT, server::error::detail_response};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Container search term {0:?} has fewer than 7 digits")]
    ContainerTooShort(String),
    #[error("Page {0} is out of range")]
    InvalidPage(u64),
    #[error("Manifest entry {0} not found")]
    ManifestNotFound(i32),
    #[error("No manifest entries registered for the requested year")]
    NoManifestForYear,
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ContainerTooShort(_) => detail_response(StatusCode::BAD_REQUEST, CONTAINER_TOO_SHORT),
            Self::InvalidPage(_) => detail_response(StatusCode::NOT_FOUND, "Invalid page."),
            Self::ManifestNotFound(_) => detail_response(StatusCode::NOT_FOUND, "Not found."),
            Self::NoManifestForYear => detail_response(
                StatusCode::NOT_FOUND,
                "Nu există manifeste înregistrate pentru anul selectat",
            ),
        }
    }
}
