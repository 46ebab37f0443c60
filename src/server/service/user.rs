use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::Error, service::auth::hash_password};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<entity::auth_user::Model>, Error> {
        Ok(UserRepository::new(self.db).get(user_id).await?)
    }

    /// Make sure a staff account with `username` exists and accepts `password`.
    ///
    /// Creates the account when missing, otherwise resets its password.
    /// Returns the account and whether it was created.
    pub async fn ensure_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(entity::auth_user::Model, bool), Error> {
        let user_repo = UserRepository::new(self.db);
        let password_hash = hash_password(password)?;

        match user_repo.find_by_username(username).await? {
            Some(user) => {
                let user = user_repo.update_password(user, &password_hash).await?;
                tracing::info!(username = %username, "Reset password of existing staff user");

                Ok((user, false))
            }
            None => {
                let user = user_repo.create(username, &password_hash).await?;
                tracing::info!(username = %username, "Created staff user");

                Ok((user, true))
            }
        }
    }
}
