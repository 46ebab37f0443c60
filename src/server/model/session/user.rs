use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use tower_sessions::{session, Session};

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "registru:user:id";

/// Id of the logged in staff account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, Self(user_id)).await?;

        Ok(())
    }

    /// Id of the logged in account, `None` for an anonymous session.
    ///
    /// A stored value that is not an account id is dropped and the session treated as
    /// anonymous.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        match session.get::<Self>(SESSION_USER_ID_KEY).await {
            Ok(user_id) => Ok(user_id.map(|Self(id)| id)),
            Err(session::Error::SerdeJson(e)) => {
                tracing::warn!("Discarding malformed session user id: {}", e);
                session.remove_value(SESSION_USER_ID_KEY).await?;

                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
