//! Password authentication for staff accounts.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
};

/// Hash `password` into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Whether `password` matches the stored PHC string. Malformed hashes never match.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Check a username and password pair and record the login.
    ///
    /// # Returns
    /// - `Ok(user)` - Credentials match a staff account
    /// - `Err(AuthError::MissingCredentials)` - Either field is absent or blank
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<entity::auth_user::Model, Error> {
        let (Some(username), Some(password)) = (
            username.filter(|u| !u.is_empty()),
            password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.find_by_username(username).await? {
            Some(user) if user.is_staff && verify_password(password, &user.password_hash) => user,
            _ => return Err(AuthError::InvalidCredentials(username.to_string()).into()),
        };

        Ok(user_repo.touch_last_login(user).await?)
    }
}
