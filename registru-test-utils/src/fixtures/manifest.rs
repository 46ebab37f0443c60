use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn manifest<'a>(&'a self) -> ManifestFixtures<'a> {
        ManifestFixtures { context: self }
    }
}

pub struct ManifestFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ManifestFixtures<'a> {
    pub async fn insert_year(
        &self,
        year: i32,
        is_active: bool,
    ) -> Result<entity::database_year::Model, TestError> {
        Ok(
            entity::prelude::DatabaseYear::insert(entity::database_year::ActiveModel {
                year: ActiveValue::Set(year),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a manifest entry with plausible defaults for every column.
    pub async fn insert_entry(
        &self,
        database_year_id: i32,
        numar_curent: i32,
        container: &str,
    ) -> Result<entity::manifest_entry::Model, TestError> {
        self.insert_entry_model(factory::entry(database_year_id, numar_curent, container))
            .await
    }

    /// Insert a manifest entry built by the caller, usually from [`factory::entry`].
    pub async fn insert_entry_model(
        &self,
        model: entity::manifest_entry::ActiveModel,
    ) -> Result<entity::manifest_entry::Model, TestError> {
        Ok(entity::prelude::ManifestEntry::insert(model)
            .exec_with_returning(&self.context.db)
            .await?)
    }

    pub async fn insert_pavilion(
        &self,
        name: &str,
        image: Option<&str>,
    ) -> Result<entity::pavilion::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Pavilion::insert(entity::pavilion::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                image: ActiveValue::Set(image.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_ship(
        &self,
        name: &str,
        pavilion_id: Option<i32>,
        image: Option<&str>,
    ) -> Result<entity::ship::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Ship::insert(entity::ship::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            shipping_line: ActiveValue::Set(String::new()),
            pavilion_id: ActiveValue::Set(pavilion_id),
            image: ActiveValue::Set(image.map(str::to_string)),
            description: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_container_type(
        &self,
        model_container: &str,
        tip_container: &str,
        image: Option<&str>,
    ) -> Result<entity::container_type::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ContainerType::insert(entity::container_type::ActiveModel {
                model_container: ActiveValue::Set(model_container.to_string()),
                tip_container: ActiveValue::Set(tip_container.to_string()),
                image: ActiveValue::Set(image.map(str::to_string)),
                description: ActiveValue::Set(String::new()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}

/// Unsaved models with every required column filled in.
pub mod factory {
    use chrono::{NaiveDate, Utc};
    use sea_orm::ActiveValue;

    /// Entry for `container` in the given year. The model container is derived the way the
    /// application derives it: first four characters of the container plus the type.
    pub fn entry(
        database_year_id: i32,
        numar_curent: i32,
        container: &str,
    ) -> entity::manifest_entry::ActiveModel {
        let now = Utc::now().naive_utc();
        let container = container.trim().to_uppercase();
        let tip_container = "22G1".to_string();
        let prefix: String = container.chars().take(4).collect();

        entity::manifest_entry::ActiveModel {
            database_year_id: ActiveValue::Set(Some(database_year_id)),
            numar_curent: ActiveValue::Set(numar_curent),
            numar_manifest: ActiveValue::Set(format!("M{numar_curent:05}")),
            numar_permis: ActiveValue::Set(format!("P{numar_curent:05}")),
            numar_pozitie: ActiveValue::Set("1".to_string()),
            cerere_operatiune: ActiveValue::Set(format!("CO{numar_curent:05}")),
            data_inregistrare: ActiveValue::Set(NaiveDate::from_ymd_opt(2025, 3, 14)),
            container: ActiveValue::Set(container),
            numar_colete: ActiveValue::Set(Some(10)),
            greutate_bruta: ActiveValue::Set(Some(12500.5)),
            descriere_marfa: ActiveValue::Set("Piese auto".to_string()),
            tip_operatiune: ActiveValue::Set("I".to_string()),
            nume_nava: ActiveValue::Set("MSC AURORA".to_string()),
            pavilion_nava: ActiveValue::Set("PANAMA".to_string()),
            numar_sumara: ActiveValue::Set(Some("ROCT25001".to_string())),
            model_container: ActiveValue::Set(format!("{prefix}{tip_container}")),
            tip_container: ActiveValue::Set(tip_container),
            linie_maritima: ActiveValue::Set("MSC".to_string()),
            observatii: ActiveValue::Set(None),
            container_type_id: ActiveValue::Set(None),
            ship_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}
