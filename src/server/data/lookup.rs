//! Reference tables linked from manifest entries: container types, pavilions and ships.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::data::{icontains, iexact};

pub struct ContainerTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContainerTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ordered by model, optionally narrowed to models or types containing `search`
    pub async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<entity::container_type::Model>, DbErr> {
        let mut query = entity::prelude::ContainerType::find()
            .order_by_asc(entity::container_type::Column::ModelContainer);

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(icontains(entity::container_type::Column::ModelContainer, search))
                    .add(icontains(entity::container_type::Column::TipContainer, search)),
            );
        }

        query.all(self.db).await
    }

    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::container_type::Model>, DbErr> {
        entity::prelude::ContainerType::find()
            .filter(entity::container_type::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn find_by_model(
        &self,
        model_container: &str,
    ) -> Result<Option<entity::container_type::Model>, DbErr> {
        entity::prelude::ContainerType::find()
            .filter(entity::container_type::Column::ModelContainer.eq(model_container))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        model_container: &str,
        tip_container: &str,
    ) -> Result<entity::container_type::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::ContainerType::insert(entity::container_type::ActiveModel {
            model_container: ActiveValue::Set(model_container.to_string()),
            tip_container: ActiveValue::Set(tip_container.to_string()),
            image: ActiveValue::Set(None),
            description: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Returns the existing row for `model_container` or creates it, along with whether
    /// it was created.
    pub async fn get_or_create(
        &self,
        model_container: &str,
        tip_container: &str,
    ) -> Result<(entity::container_type::Model, bool), DbErr> {
        if let Some(existing) = self.find_by_model(model_container).await? {
            return Ok((existing, false));
        }

        Ok((self.create(model_container, tip_container).await?, true))
    }
}

pub struct PavilionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PavilionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<entity::pavilion::Model>, DbErr> {
        let mut query =
            entity::prelude::Pavilion::find().order_by_asc(entity::pavilion::Column::Name);

        if let Some(search) = search {
            query = query.filter(icontains(entity::pavilion::Column::Name, search));
        }

        query.all(self.db).await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::pavilion::Model>, DbErr> {
        entity::prelude::Pavilion::find()
            .filter(entity::pavilion::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::pavilion::Model>, DbErr> {
        entity::prelude::Pavilion::find()
            .filter(entity::pavilion::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Exact-name lookup after trimming; creates the flag when missing.
    pub async fn get_or_create(
        &self,
        name: &str,
    ) -> Result<(entity::pavilion::Model, bool), DbErr> {
        let name = name.trim();

        if let Some(existing) = self.find_by_name(name).await? {
            return Ok((existing, false));
        }

        let now = Utc::now().naive_utc();
        let created = entity::prelude::Pavilion::insert(entity::pavilion::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok((created, true))
    }
}

pub struct ShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ships with their flag, ordered by name
    pub async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<(entity::ship::Model, Option<entity::pavilion::Model>)>, DbErr> {
        let mut query = entity::prelude::Ship::find()
            .find_also_related(entity::pavilion::Entity)
            .order_by_asc(entity::ship::Column::Name);

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(icontains(entity::ship::Column::Name, search))
                    .add(icontains(entity::ship::Column::ShippingLine, search)),
            );
        }

        query.all(self.db).await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find()
            .filter(entity::ship::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Case-insensitive name match
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::ship::Model>, DbErr> {
        entity::prelude::Ship::find()
            .filter(iexact(entity::ship::Column::Name, name))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: &str,
        shipping_line: &str,
        pavilion_id: Option<i32>,
    ) -> Result<entity::ship::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Ship::insert(entity::ship::ActiveModel {
            name: ActiveValue::Set(name.trim().to_string()),
            shipping_line: ActiveValue::Set(shipping_line.to_string()),
            pavilion_id: ActiveValue::Set(pavilion_id),
            image: ActiveValue::Set(None),
            description: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }
}
