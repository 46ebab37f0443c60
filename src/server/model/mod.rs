//! Server-side models: application state and typed session entries.

pub mod app;
pub mod session;
