//! Helpers shared by controllers: CSRF validation, session user lookup and pagination
//! envelopes.

pub mod csrf;
pub mod get_user;
pub mod page;
