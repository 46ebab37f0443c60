use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, registry::RegistryError, Error},
    model::{app::AppState, session::user::SessionUserId},
    service::user::UserService,
};

/// Retrieves the logged in user from the session and then from the database
///
/// # Returns
/// - `Ok(user)`: User found
/// - `Err(AuthError::UserNotInSession)`: No user ID in session
/// - `Err(AuthError::UserNotInDatabase)`: User ID in session but not in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::auth_user::Model, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Like [`get_user_from_session`], additionally requiring a staff account
pub async fn get_staff_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::auth_user::Model, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.is_staff {
        return Err(RegistryError::NotStaff(user.username).into());
    }

    Ok(user)
}
