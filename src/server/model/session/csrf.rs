//! CSRF token kept in the session and mirrored into the `csrftoken` cookie.

use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_CSRF_KEY: &str = "registru:auth:csrf";

/// Length of generated tokens.
pub const CSRF_TOKEN_LENGTH: usize = 32;

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCsrfToken(pub String);

impl SessionCsrfToken {
    /// Return the session's token, generating and storing one first if needed.
    pub async fn get_or_create(session: &Session) -> Result<String, Error> {
        if let Some(SessionCsrfToken(token)) = session.get(SESSION_CSRF_KEY).await? {
            return Ok(token);
        }

        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CSRF_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        session
            .insert(SESSION_CSRF_KEY, SessionCsrfToken(token.clone()))
            .await?;

        Ok(token)
    }

    /// Get the session's token.
    ///
    /// # Returns
    /// - `Ok(String)` - Token present
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - The session never requested one
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionCsrfToken>(SESSION_CSRF_KEY).await? {
            Some(SessionCsrfToken(token)) => Ok(token),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
