use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a staff account. `password_hash` must already be a PHC string.
    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<entity::auth_user::Model, TestError> {
        self.insert_user_with_staff(username, password_hash, true)
            .await
    }

    /// Insert an account without staff rights.
    pub async fn insert_non_staff_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<entity::auth_user::Model, TestError> {
        self.insert_user_with_staff(username, password_hash, false)
            .await
    }

    async fn insert_user_with_staff(
        &self,
        username: &str,
        password_hash: &str,
        is_staff: bool,
    ) -> Result<entity::auth_user::Model, TestError> {
        Ok(
            entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                is_staff: ActiveValue::Set(is_staff),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                last_login: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
