//! Reference tables: read-only listings and synchronisation from manifest entries.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::manifest::{ContainerTypeDto, PavilionDto, ShipDto},
    server::{
        data::{
            lookup::{ContainerTypeRepository, PavilionRepository, ShipRepository},
            manifest::ManifestRepository,
        },
        error::Error,
        service::manifest::media_path,
    },
};

/// Rows created or updated by [`LookupSyncService::sync`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub container_types_created: usize,
    pub pavilions_created: usize,
    pub ships_created: usize,
    pub entries_linked: usize,
}

pub struct LookupService<'a> {
    db: &'a DatabaseConnection,
    media_url: &'a str,
}

impl<'a> LookupService<'a> {
    pub fn new(db: &'a DatabaseConnection, media_url: &'a str) -> Self {
        Self { db, media_url }
    }

    pub async fn container_types(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<ContainerTypeDto>, Error> {
        let container_types = ContainerTypeRepository::new(self.db).list(search).await?;

        Ok(container_types
            .into_iter()
            .map(|c| ContainerTypeDto {
                id: c.id,
                model_container: c.model_container,
                tip_container: c.tip_container,
                image: media_path(self.media_url, c.image.as_deref()),
                description: c.description,
            })
            .collect())
    }

    pub async fn pavilions(&self, search: Option<&str>) -> Result<Vec<PavilionDto>, Error> {
        let pavilions = PavilionRepository::new(self.db).list(search).await?;

        Ok(pavilions
            .into_iter()
            .map(|p| PavilionDto {
                id: p.id,
                name: p.name,
                image: media_path(self.media_url, p.image.as_deref()),
            })
            .collect())
    }

    pub async fn ships(&self, search: Option<&str>) -> Result<Vec<ShipDto>, Error> {
        let ships = ShipRepository::new(self.db).list(search).await?;

        Ok(ships
            .into_iter()
            .map(|(s, pavilion)| ShipDto {
                id: s.id,
                name: s.name,
                shipping_line: s.shipping_line,
                pavilion: pavilion.map(|p| p.name),
                image: media_path(self.media_url, s.image.as_deref()),
                description: s.description,
            })
            .collect())
    }
}

pub struct LookupSyncService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LookupSyncService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Recreate missing lookup rows from the values written on manifest entries, then link
    /// entries that lack a container type or ship.
    ///
    /// Safe to run repeatedly; a second run reports nothing new.
    pub async fn sync(&self) -> Result<SyncReport, Error> {
        let manifest_repo = ManifestRepository::new(self.db);
        let container_type_repo = ContainerTypeRepository::new(self.db);
        let pavilion_repo = PavilionRepository::new(self.db);
        let ship_repo = ShipRepository::new(self.db);

        let mut report = SyncReport::default();

        for (model, tip) in manifest_repo.distinct_container_models().await? {
            let (_, created) = container_type_repo.get_or_create(&model, &tip).await?;
            if created {
                report.container_types_created += 1;
            }
        }
        tracing::info!(
            created = report.container_types_created,
            "Synchronised container types"
        );

        for name in manifest_repo.distinct_pavilions().await? {
            if name.trim().is_empty() {
                continue;
            }

            let (_, created) = pavilion_repo.get_or_create(&name).await?;
            if created {
                report.pavilions_created += 1;
            }
        }
        tracing::info!(created = report.pavilions_created, "Synchronised pavilions");

        for (name, shipping_line, pavilion_name) in manifest_repo.distinct_ships().await? {
            if name.trim().is_empty() || ship_repo.find_by_name(name.trim()).await?.is_some() {
                continue;
            }

            let pavilion_id = match pavilion_name.trim() {
                "" => None,
                pavilion_name => pavilion_repo.find_by_name(pavilion_name).await?.map(|p| p.id),
            };

            ship_repo.create(&name, &shipping_line, pavilion_id).await?;
            report.ships_created += 1;
        }
        tracing::info!(created = report.ships_created, "Synchronised ships");

        for entry in manifest_repo.unlinked().await? {
            let container_type_id = match (&entry.container_type_id, entry.model_container.as_str()) {
                (None, model) if !model.is_empty() => container_type_repo
                    .find_by_model(model)
                    .await?
                    .map(|c| c.id),
                _ => None,
            };

            let ship_id = match (&entry.ship_id, entry.nume_nava.trim()) {
                (None, name) if !name.is_empty() => {
                    ship_repo.find_by_name(name).await?.map(|s| s.id)
                }
                _ => None,
            };

            if container_type_id.is_none() && ship_id.is_none() {
                continue;
            }

            manifest_repo
                .set_relations(entry, container_type_id, ship_id)
                .await?;
            report.entries_linked += 1;
        }
        tracing::info!(updated = report.entries_linked, "Linked manifest entries");

        Ok(report)
    }
}
