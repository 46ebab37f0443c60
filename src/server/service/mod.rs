//! Service layer for business logic.
//!
//! Services sit between controllers and repositories: they validate input, resolve
//! defaults such as the active year, and convert database models into API DTOs.

pub mod auth;
pub mod lookup;
pub mod manifest;
pub mod user;
pub mod year;
