pub use sea_orm_migration::prelude::*;

mod m20251101_000001_database_year;
mod m20251101_000002_pavilion;
mod m20251101_000003_ship;
mod m20251101_000004_container_type;
mod m20251101_000005_manifest_entry;
mod m20251101_000006_auth_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_database_year::Migration),
            Box::new(m20251101_000002_pavilion::Migration),
            Box::new(m20251101_000003_ship::Migration),
            Box::new(m20251101_000004_container_type::Migration),
            Box::new(m20251101_000005_manifest_entry::Migration),
            Box::new(m20251101_000006_auth_user::Migration),
        ]
    }
}
