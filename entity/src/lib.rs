pub mod prelude;

pub mod auth_user;
pub mod container_type;
pub mod database_year;
pub mod manifest_entry;
pub mod pavilion;
pub mod ship;
