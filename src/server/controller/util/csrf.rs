use axum::http::HeaderMap;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::csrf::SessionCsrfToken,
};

/// Header state-changing requests carry the CSRF token in
pub const CSRF_HEADER: &str = "x-csrftoken";

/// Validate that the `X-CSRFToken` header matches the token stored in the session.
///
/// Returns `Ok(())` when valid, `AuthError::CsrfMissingValue` when the session never issued
/// a token and `AuthError::CsrfValidationFailed` for a missing or different header.
pub async fn validate_csrf(session: &Session, headers: &HeaderMap) -> Result<(), Error> {
    let stored = SessionCsrfToken::get(session).await?;

    let provided = headers
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(token) if token == stored => Ok(()),
        _ => Err(Error::AuthError(AuthError::CsrfValidationFailed)),
    }
}
