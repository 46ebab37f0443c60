//! Typed wrappers around values stored in the user's session.

pub mod csrf;
pub mod user;
