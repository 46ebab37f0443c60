use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new staff user from an already hashed password
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<entity::auth_user::Model, DbErr> {
        let user = entity::auth_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            is_staff: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn update_password(
        &self,
        user: entity::auth_user::Model,
        password_hash: &str,
    ) -> Result<entity::auth_user::Model, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash.to_string());
        user_am.is_staff = ActiveValue::Set(true);

        user_am.update(self.db).await
    }

    pub async fn touch_last_login(
        &self,
        user: entity::auth_user::Model,
    ) -> Result<entity::auth_user::Model, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.last_login = ActiveValue::Set(Some(Utc::now().naive_utc()));

        user_am.update(self.db).await
    }
}
