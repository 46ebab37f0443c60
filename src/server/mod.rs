//! Server application core modules.
//!
//! The REST backend of the registry: axum routing, session authentication with CSRF
//! protection, sea-orm repositories and the services the handlers delegate to.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
