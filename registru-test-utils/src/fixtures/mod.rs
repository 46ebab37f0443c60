//! Database fixtures used during the second phase of a test, after `TestBuilder::build`.
//!
//! - `manifest` - registry years, lookup tables and manifest entries
//! - `user` - staff accounts

pub mod manifest;
pub mod user;
