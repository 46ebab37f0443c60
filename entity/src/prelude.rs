pub use super::auth_user::Entity as AuthUser;
pub use super::container_type::Entity as ContainerType;
pub use super::database_year::Entity as DatabaseYear;
pub use super::manifest_entry::Entity as ManifestEntry;
pub use super::pavilion::Entity as Pavilion;
pub use super::ship::Entity as Ship;
