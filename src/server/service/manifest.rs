//! Manifest search, listing and recording.

use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::{
        container::{is_searchable, model_container, normalize},
        manifest::{ManifestEntryDto, NewManifestEntryDto},
    },
    server::{
        data::{
            lookup::{ContainerTypeRepository, PavilionRepository, ShipRepository},
            manifest::{ManifestFilter, ManifestPage, ManifestRepository},
            year::YearRepository,
        },
        error::{registry::RegistryError, search::SearchError, Error},
    },
};

/// Search criteria as received from the client.
#[derive(Clone, Debug, Default)]
pub struct ManifestSearch {
    pub container: Option<String>,
    pub numar_manifest: Option<String>,
    pub year: Option<i32>,
}

/// One page of manifest DTOs with the numbers needed to build page links.
#[derive(Clone, Debug, PartialEq)]
pub struct ManifestResults {
    pub items: Vec<ManifestEntryDto>,
    pub count: u64,
    pub page: u64,
    pub num_pages: u64,
}

/// Fields of a manifest entry being recorded. Everything derivable is optional.
#[derive(Clone, Debug, Default)]
pub struct ManifestRecord {
    pub database_year_id: Option<i32>,
    /// Running number; assigned as the current maximum plus one when `None` or `0`
    pub numar_curent: Option<i32>,
    pub numar_manifest: String,
    pub numar_permis: String,
    pub numar_pozitie: String,
    pub cerere_operatiune: String,
    pub data_inregistrare: Option<NaiveDate>,
    pub container: String,
    pub numar_colete: Option<i32>,
    pub greutate_bruta: Option<f64>,
    pub descriere_marfa: String,
    pub tip_operatiune: String,
    pub nume_nava: String,
    pub pavilion_nava: String,
    pub numar_sumara: Option<String>,
    pub tip_container: String,
    pub linie_maritima: String,
    pub observatii: Option<String>,
}

impl From<NewManifestEntryDto> for ManifestRecord {
    fn from(dto: NewManifestEntryDto) -> Self {
        Self {
            database_year_id: dto.database_year_id,
            numar_curent: dto.numar_curent,
            numar_manifest: dto.numar_manifest,
            numar_permis: dto.numar_permis,
            numar_pozitie: dto.numar_pozitie,
            cerere_operatiune: dto.cerere_operatiune,
            data_inregistrare: dto.data_inregistrare,
            container: dto.container,
            numar_colete: dto.numar_colete,
            greutate_bruta: dto.greutate_bruta,
            descriere_marfa: dto.descriere_marfa,
            tip_operatiune: dto.tip_operatiune,
            nume_nava: dto.nume_nava,
            pavilion_nava: dto.pavilion_nava,
            numar_sumara: dto.numar_sumara,
            tip_container: dto.tip_container,
            linie_maritima: dto.linie_maritima,
            observatii: dto.observatii,
        }
    }
}

pub struct ManifestService<'a> {
    db: &'a DatabaseConnection,
    media_url: &'a str,
}

impl<'a> ManifestService<'a> {
    /// `media_url` is prepended to stored image paths
    pub fn new(db: &'a DatabaseConnection, media_url: &'a str) -> Self {
        Self { db, media_url }
    }

    /// Search entries by container and manifest number within a year.
    ///
    /// Without an explicit year the active year is used; when none is active every year
    /// is searched. A container term with fewer than 7 digits is rejected.
    pub async fn search(
        &self,
        search: ManifestSearch,
        page: u64,
        page_size: u64,
    ) -> Result<ManifestResults, Error> {
        let container = search
            .container
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        if let Some(container) = container {
            if !is_searchable(container) {
                return Err(SearchError::ContainerTooShort(container.to_string()).into());
            }
        }

        let year = match search.year {
            Some(year) => Some(year),
            None => YearRepository::new(self.db)
                .active()
                .await?
                .map(|active| active.year),
        };

        let filter = ManifestFilter {
            year,
            container: container.map(str::to_string),
            numar_manifest: search.numar_manifest,
            search: None,
        };

        let page_result = ManifestRepository::new(self.db)
            .search(&filter, page, page_size)
            .await?;

        self.results(page_result, page).await
    }

    /// Every entry, most recent registration first, optionally narrowed by free text
    pub async fn list(
        &self,
        search: Option<String>,
        page: u64,
        page_size: u64,
    ) -> Result<ManifestResults, Error> {
        let filter = ManifestFilter {
            search,
            ..Default::default()
        };

        let page_result = ManifestRepository::new(self.db)
            .list(&filter, page, page_size)
            .await?;

        self.results(page_result, page).await
    }

    pub async fn get(&self, id: i32) -> Result<ManifestEntryDto, Error> {
        let entry = ManifestRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(SearchError::ManifestNotFound(id))?;

        self.single(entry).await
    }

    /// Entry with the highest running number in `year`, or in the active year.
    ///
    /// Falls back to the most recent year when none is active.
    pub async fn latest(&self, year: Option<i32>) -> Result<ManifestEntryDto, Error> {
        let year_repo = YearRepository::new(self.db);

        let year = match year {
            Some(year) => year_repo.find_by_year(year).await?,
            None => match year_repo.active().await? {
                Some(active) => Some(active),
                None => year_repo.most_recent().await?,
            },
        }
        .ok_or(SearchError::NoManifestForYear)?;

        let entry = ManifestRepository::new(self.db)
            .latest_in_year(year.id)
            .await?
            .ok_or(SearchError::NoManifestForYear)?;

        self.single(entry).await
    }

    /// Store a new entry, rejecting a blank container or manifest number, deriving the container model and running number and linking
    /// (or creating) its container type, pavilion and ship.
    pub async fn record_entry(&self, record: ManifestRecord) -> Result<ManifestEntryDto, Error> {
        let manifest_repo = ManifestRepository::new(self.db);
        let year_repo = YearRepository::new(self.db);

        let container = normalize(&record.container);
        if container.is_empty() {
            return Err(RegistryError::MissingField("container").into());
        }
        if record.numar_manifest.trim().is_empty() {
            return Err(RegistryError::MissingField("numar_manifest").into());
        }

        let tip_container = record.tip_container.trim().to_string();
        let model = model_container(&container, &tip_container);

        let numar_curent = match record.numar_curent {
            Some(n) if n > 0 => n,
            _ => manifest_repo.max_numar_curent().await?.unwrap_or(0) + 1,
        };

        let database_year_id = match record.database_year_id {
            Some(id) => {
                if year_repo.find_by_ids(vec![id]).await?.is_empty() {
                    return Err(RegistryError::YearNotFound(id).into());
                }
                Some(id)
            }
            None => match year_repo.active().await? {
                Some(active) => Some(active.id),
                None => year_repo.most_recent().await?.map(|y| y.id),
            },
        };

        let container_type_id = if model.is_empty() {
            None
        } else {
            let (container_type, _) = ContainerTypeRepository::new(self.db)
                .get_or_create(&model, &tip_container)
                .await?;
            Some(container_type.id)
        };

        let ship_id = if record.nume_nava.trim().is_empty() {
            None
        } else {
            Some(
                self.ship_for(&record.nume_nava, &record.linie_maritima, &record.pavilion_nava)
                    .await?,
            )
        };

        let now = Utc::now().naive_utc();
        let entry = manifest_repo
            .create(entity::manifest_entry::ActiveModel {
                database_year_id: ActiveValue::Set(database_year_id),
                numar_curent: ActiveValue::Set(numar_curent),
                numar_manifest: ActiveValue::Set(record.numar_manifest),
                numar_permis: ActiveValue::Set(record.numar_permis),
                numar_pozitie: ActiveValue::Set(record.numar_pozitie),
                cerere_operatiune: ActiveValue::Set(record.cerere_operatiune),
                data_inregistrare: ActiveValue::Set(record.data_inregistrare),
                container: ActiveValue::Set(container),
                numar_colete: ActiveValue::Set(record.numar_colete),
                greutate_bruta: ActiveValue::Set(record.greutate_bruta),
                descriere_marfa: ActiveValue::Set(record.descriere_marfa),
                tip_operatiune: ActiveValue::Set(record.tip_operatiune),
                nume_nava: ActiveValue::Set(record.nume_nava),
                pavilion_nava: ActiveValue::Set(record.pavilion_nava),
                numar_sumara: ActiveValue::Set(record.numar_sumara),
                tip_container: ActiveValue::Set(tip_container),
                linie_maritima: ActiveValue::Set(record.linie_maritima),
                model_container: ActiveValue::Set(model),
                observatii: ActiveValue::Set(record.observatii),
                container_type_id: ActiveValue::Set(container_type_id),
                ship_id: ActiveValue::Set(ship_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .await?;

        self.single(entry).await
    }

    /// Ship matched case-insensitively by name, created with its flag when missing
    async fn ship_for(
        &self,
        nume_nava: &str,
        linie_maritima: &str,
        pavilion_nava: &str,
    ) -> Result<i32, Error> {
        let pavilion_id = if pavilion_nava.trim().is_empty() {
            None
        } else {
            let (pavilion, _) = PavilionRepository::new(self.db)
                .get_or_create(pavilion_nava)
                .await?;
            Some(pavilion.id)
        };

        let ship_repo = ShipRepository::new(self.db);
        let ship = match ship_repo.find_by_name(nume_nava.trim()).await? {
            Some(ship) => ship,
            None => {
                ship_repo
                    .create(nume_nava, linie_maritima, pavilion_id)
                    .await?
            }
        };

        Ok(ship.id)
    }

    async fn results(
        &self,
        page_result: Option<ManifestPage>,
        page: u64,
    ) -> Result<ManifestResults, Error> {
        let ManifestPage { items, info } = page_result.ok_or(SearchError::InvalidPage(page))?;

        Ok(ManifestResults {
            items: self.to_dtos(items).await?,
            count: info.count,
            page,
            num_pages: info.num_pages,
        })
    }

    async fn single(&self, entry: entity::manifest_entry::Model) -> Result<ManifestEntryDto, Error> {
        self.to_dtos(vec![entry])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Converted entry went missing".to_string()))
    }

    /// Convert entries to DTOs, resolving year and image references in batched lookups
    async fn to_dtos(
        &self,
        entries: Vec<entity::manifest_entry::Model>,
    ) -> Result<Vec<ManifestEntryDto>, Error> {
        let year_ids = unique_ids(entries.iter().map(|e| e.database_year_id));
        let ship_ids = unique_ids(entries.iter().map(|e| e.ship_id));
        let container_type_ids = unique_ids(entries.iter().map(|e| e.container_type_id));

        let years: HashMap<i32, i32> = YearRepository::new(self.db)
            .find_by_ids(year_ids)
            .await?
            .into_iter()
            .map(|y| (y.id, y.year))
            .collect();
        let ships: HashMap<i32, entity::ship::Model> = ShipRepository::new(self.db)
            .find_by_ids(ship_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let container_types: HashMap<i32, entity::container_type::Model> =
            ContainerTypeRepository::new(self.db)
                .find_by_ids(container_type_ids)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        let pavilion_ids = unique_ids(ships.values().map(|s| s.pavilion_id));
        let pavilions: HashMap<i32, entity::pavilion::Model> = PavilionRepository::new(self.db)
            .find_by_ids(pavilion_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let dtos = entries
            .into_iter()
            .map(|entry| {
                let ship = entry.ship_id.and_then(|id| ships.get(&id));
                let container_type = entry.container_type_id.and_then(|id| container_types.get(&id));
                let pavilion = ship
                    .and_then(|s| s.pavilion_id)
                    .and_then(|id| pavilions.get(&id));

                ManifestEntryDto {
                    id: entry.id,
                    numar_curent: entry.numar_curent,
                    numar_manifest: entry.numar_manifest,
                    numar_permis: entry.numar_permis,
                    numar_pozitie: entry.numar_pozitie,
                    cerere_operatiune: entry.cerere_operatiune,
                    data_inregistrare: entry.data_inregistrare,
                    container: entry.container,
                    numar_colete: entry.numar_colete,
                    greutate_bruta: entry.greutate_bruta,
                    descriere_marfa: entry.descriere_marfa,
                    tip_operatiune: entry.tip_operatiune,
                    nume_nava: entry.nume_nava,
                    pavilion_nava: entry.pavilion_nava,
                    numar_sumara: entry.numar_sumara,
                    tip_container: entry.tip_container,
                    linie_maritima: entry.linie_maritima,
                    model_container: entry.model_container,
                    observatii: entry.observatii,
                    year: entry.database_year_id.and_then(|id| years.get(&id).copied()),
                    ship_image: media_path(self.media_url, ship.and_then(|s| s.image.as_deref())),
                    container_type_image: media_path(
                        self.media_url,
                        container_type.and_then(|c| c.image.as_deref()),
                    ),
                    pavilion_image: media_path(
                        self.media_url,
                        pavilion.and_then(|p| p.image.as_deref()),
                    ),
                }
            })
            .collect();

        Ok(dtos)
    }
}

fn unique_ids(ids: impl Iterator<Item = Option<i32>>) -> Vec<i32> {
    ids.flatten().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Public URL of a stored image path, `None` when no image is stored
pub fn media_path(media_url: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;

    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
        return Some(path.to_string());
    }

    Some(format!("{}{}", media_url, path))
}
