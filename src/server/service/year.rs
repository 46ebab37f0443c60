use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::manifest::YearDto,
    server::{
        data::year::YearRepository,
        error::{registry::RegistryError, Error},
    },
};

/// Calendar years accepted for a registry year.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=9999;

pub struct YearService<'a> {
    db: &'a DatabaseConnection,
}

fn to_dto(year: entity::database_year::Model) -> YearDto {
    YearDto {
        id: year.id,
        year: year.year,
        is_active: year.is_active,
    }
}

impl<'a> YearService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every registry year, newest first
    pub async fn list(&self) -> Result<Vec<YearDto>, Error> {
        let years = YearRepository::new(self.db).list().await?;

        Ok(years.into_iter().map(to_dto).collect())
    }

    /// Create a registry year, optionally making it the only active one.
    ///
    /// # Returns
    /// - `Ok(year)`: The new year
    /// - `Err(RegistryError::InvalidYear)`: Outside [`YEAR_RANGE`]
    /// - `Err(RegistryError::DuplicateYear)`: The year already exists
    pub async fn create(&self, year: i32, is_active: bool) -> Result<YearDto, Error> {
        if !YEAR_RANGE.contains(&year) {
            return Err(RegistryError::InvalidYear(year).into());
        }

        let year_repo = YearRepository::new(self.db);
        if year_repo.find_by_year(year).await?.is_some() {
            return Err(RegistryError::DuplicateYear(year).into());
        }

        let created = year_repo.create(year, false).await?;
        tracing::info!(year = year, "Created registry year");

        if is_active {
            return self.activate(created.id).await;
        }

        Ok(to_dto(created))
    }

    /// Make the year with `id` the only active one
    pub async fn activate(&self, id: i32) -> Result<YearDto, Error> {
        let year = YearRepository::new(self.db)
            .activate(id)
            .await?
            .ok_or(RegistryError::YearNotFound(id))?;

        tracing::info!(year = year.year, "Activated registry year");

        Ok(to_dto(year))
    }
}
