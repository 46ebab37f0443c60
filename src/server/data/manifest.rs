//! Manifest entry queries: filtered search, paginated listing and the running-number
//! bookkeeping used when recording new entries.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::data::{icontains, query::QueryHelper, PageInfo};

/// Criteria shared by search and listing. Blank strings are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestFilter {
    /// Calendar year, e.g. 2025
    pub year: Option<i32>,
    /// Matches the container number or the container model
    pub container: Option<String>,
    pub numar_manifest: Option<String>,
    /// Free text over manifest number, container, model and ship name
    pub search: Option<String>,
}

impl ManifestFilter {
    fn condition(&self) -> Condition {
        use entity::manifest_entry::Column;

        let mut condition = Condition::all();

        if let Some(container) = non_blank(&self.container) {
            condition = condition.add(
                Condition::any()
                    .add(icontains(Column::Container, container))
                    .add(icontains(Column::ModelContainer, container)),
            );
        }

        if let Some(numar_manifest) = non_blank(&self.numar_manifest) {
            condition = condition.add(icontains(Column::NumarManifest, numar_manifest));
        }

        if let Some(search) = non_blank(&self.search) {
            condition = condition.add(
                Condition::any()
                    .add(icontains(Column::NumarManifest, search))
                    .add(icontains(Column::Container, search))
                    .add(icontains(Column::ModelContainer, search))
                    .add(icontains(Column::NumeNava, search)),
            );
        }

        condition
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Clone, Debug, PartialEq)]
pub struct ManifestPage {
    pub items: Vec<entity::manifest_entry::Model>,
    pub info: PageInfo,
}

pub struct ManifestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ManifestRepository<'a, C> {
    /// Creates a new instance of [`ManifestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn filtered(&self, filter: &ManifestFilter) -> Select<entity::manifest_entry::Entity> {
        let mut query = entity::prelude::ManifestEntry::find().filter(filter.condition());

        if let Some(year) = filter.year {
            query = query
                .inner_join(entity::database_year::Entity)
                .filter(entity::database_year::Column::Year.eq(year));
        }

        query
    }

    /// Entries matching `filter` ordered by running number.
    ///
    /// Returns `Ok(None)` when `page` (one-based) is past the last page.
    pub async fn search(
        &self,
        filter: &ManifestFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Option<ManifestPage>, DbErr> {
        let query = self
            .filtered(filter)
            .order_by_asc(entity::manifest_entry::Column::NumarCurent)
            .order_by_asc(entity::manifest_entry::Column::Id);

        self.page_of(query, page, page_size).await
    }

    /// Entries matching `filter`, most recent registration date first.
    pub async fn list(
        &self,
        filter: &ManifestFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Option<ManifestPage>, DbErr> {
        let query = self
            .filtered(filter)
            .order_by_desc(entity::manifest_entry::Column::DataInregistrare)
            .order_by_desc(entity::manifest_entry::Column::Id);

        self.page_of(query, page, page_size).await
    }

    async fn page_of(
        &self,
        query: Select<entity::manifest_entry::Entity>,
        page: u64,
        page_size: u64,
    ) -> Result<Option<ManifestPage>, DbErr> {
        let page_size = page_size.max(1);
        let paginator = query.paginate(self.db, page_size);
        let info = PageInfo::new(paginator.num_items().await?, page_size);

        if !info.contains(page) {
            return Ok(None);
        }

        let items = paginator.fetch_page(page - 1).await?;

        Ok(Some(ManifestPage { items, info }))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::manifest_entry::Model>, DbErr> {
        entity::prelude::ManifestEntry::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Entry with the highest running number within the year record `database_year_id`
    pub async fn latest_in_year(
        &self,
        database_year_id: i32,
    ) -> Result<Option<entity::manifest_entry::Model>, DbErr> {
        let row = QueryHelper::new(self.db)
            .fetch_one(
                "SELECT id FROM manifest_entry WHERE database_year_id = ? \
                 ORDER BY numar_curent DESC, id DESC LIMIT 1",
                vec![database_year_id.into()],
            )
            .await?;

        let Some(id) = row
            .and_then(|row| row.get("id").and_then(|id| id.as_i64()))
            .and_then(|id| i32::try_from(id).ok())
        else {
            return Ok(None);
        };

        self.get_by_id(id).await
    }

    /// Highest running number across every year, `None` when the table is empty
    pub async fn max_numar_curent(&self) -> Result<Option<i32>, DbErr> {
        let max = entity::prelude::ManifestEntry::find()
            .select_only()
            .column_as(entity::manifest_entry::Column::NumarCurent.max(), "max")
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?;

        Ok(max.flatten())
    }

    pub async fn create(
        &self,
        entry: entity::manifest_entry::ActiveModel,
    ) -> Result<entity::manifest_entry::Model, DbErr> {
        entity::prelude::ManifestEntry::insert(entry)
            .exec_with_returning(self.db)
            .await
    }

    /// Link an entry to its container type and ship, leaving `None` links untouched
    pub async fn set_relations(
        &self,
        entry: entity::manifest_entry::Model,
        container_type_id: Option<i32>,
        ship_id: Option<i32>,
    ) -> Result<entity::manifest_entry::Model, DbErr> {
        let mut entry_am = entry.into_active_model();

        if let Some(container_type_id) = container_type_id {
            entry_am.container_type_id = ActiveValue::Set(Some(container_type_id));
        }
        if let Some(ship_id) = ship_id {
            entry_am.ship_id = ActiveValue::Set(Some(ship_id));
        }

        entry_am.update(self.db).await
    }

    /// Distinct non-empty `(model_container, tip_container)` pairs
    pub async fn distinct_container_models(&self) -> Result<Vec<(String, String)>, DbErr> {
        entity::prelude::ManifestEntry::find()
            .select_only()
            .column(entity::manifest_entry::Column::ModelContainer)
            .column(entity::manifest_entry::Column::TipContainer)
            .filter(entity::manifest_entry::Column::ModelContainer.ne(""))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Distinct non-empty flag names as written on entries
    pub async fn distinct_pavilions(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::ManifestEntry::find()
            .select_only()
            .column(entity::manifest_entry::Column::PavilionNava)
            .filter(entity::manifest_entry::Column::PavilionNava.ne(""))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Distinct `(nume_nava, linie_maritima, pavilion_nava)` triples with a ship name
    pub async fn distinct_ships(&self) -> Result<Vec<(String, String, String)>, DbErr> {
        entity::prelude::ManifestEntry::find()
            .select_only()
            .column(entity::manifest_entry::Column::NumeNava)
            .column(entity::manifest_entry::Column::LinieMaritima)
            .column(entity::manifest_entry::Column::PavilionNava)
            .filter(entity::manifest_entry::Column::NumeNava.ne(""))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Entries missing a container type or ship link
    pub async fn unlinked(&self) -> Result<Vec<entity::manifest_entry::Model>, DbErr> {
        entity::prelude::ManifestEntry::find()
            .filter(
                Condition::any()
                    .add(entity::manifest_entry::Column::ContainerTypeId.is_null())
                    .add(entity::manifest_entry::Column::ShipId.is_null()),
            )
            .order_by_asc(entity::manifest_entry::Column::Id)
            .all(self.db)
            .await
    }
}
