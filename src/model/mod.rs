//! Types shared between the client and the server.
//!
//! DTOs cross the wire as JSON; the container helpers are used by both the client-side
//! search guard and the server-side validation so the two can never disagree.

pub mod api;
pub mod auth;
pub mod container;
pub mod manifest;
