use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionSession, TransactionTrait,
};

pub struct YearRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> YearRepository<'a, C> {
    /// Creates a new instance of [`YearRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All registry years, newest first
    pub async fn list(&self) -> Result<Vec<entity::database_year::Model>, DbErr> {
        entity::prelude::DatabaseYear::find()
            .order_by_desc(entity::database_year::Column::Year)
            .all(self.db)
            .await
    }

    /// The year flagged active. When several are flagged, the newest wins.
    pub async fn active(&self) -> Result<Option<entity::database_year::Model>, DbErr> {
        entity::prelude::DatabaseYear::find()
            .filter(entity::database_year::Column::IsActive.eq(true))
            .order_by_desc(entity::database_year::Column::Year)
            .one(self.db)
            .await
    }

    pub async fn most_recent(&self) -> Result<Option<entity::database_year::Model>, DbErr> {
        entity::prelude::DatabaseYear::find()
            .order_by_desc(entity::database_year::Column::Year)
            .one(self.db)
            .await
    }

    pub async fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::database_year::Model>, DbErr> {
        entity::prelude::DatabaseYear::find()
            .filter(entity::database_year::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn find_by_year(
        &self,
        year: i32,
    ) -> Result<Option<entity::database_year::Model>, DbErr> {
        entity::prelude::DatabaseYear::find()
            .filter(entity::database_year::Column::Year.eq(year))
            .one(self.db)
            .await
    }

    /// Inserts a registry year. The unique `year` column rejects duplicates.
    pub async fn create(
        &self,
        year: i32,
        is_active: bool,
    ) -> Result<entity::database_year::Model, DbErr> {
        let year = entity::database_year::ActiveModel {
            year: ActiveValue::Set(year),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        year.insert(self.db).await
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> YearRepository<'a, C> {
    /// Makes `id` the only active year.
    ///
    /// Every other year is deactivated in the same transaction. Returns `None` and
    /// changes nothing when the year does not exist.
    pub async fn activate(&self, id: i32) -> Result<Option<entity::database_year::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(year) = entity::prelude::DatabaseYear::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        entity::prelude::DatabaseYear::update_many()
            .col_expr(entity::database_year::Column::IsActive, Expr::value(false))
            .filter(entity::database_year::Column::Id.ne(id))
            .exec(&txn)
            .await?;

        let mut year_am = year.into_active_model();
        year_am.is_active = ActiveValue::Set(true);
        let year = year_am.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(year))
    }
}
