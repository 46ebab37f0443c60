//! Integration tests for the HTTP controllers, calling handlers directly with an in-memory
//! database and a memory-backed session.

mod auth;
mod lookup;
mod manifest;
mod router;
mod year;
