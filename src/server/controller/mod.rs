//! HTTP controller endpoints for the registry API.
//!
//! Axum handlers for authentication, manifest search and the read-only lookup tables.
//! Handlers check the session, delegate to services and wrap results in the JSON shapes
//! the client expects; every endpoint carries a utoipa annotation for the OpenAPI document.

pub mod auth;
pub mod lookup;
pub mod manifest;
pub mod util;
pub mod year;
