//! Test context returned by `TestBuilder`.
//!
//! Holds an in-memory SQLite database and a memory-backed session, which is everything
//! the server layers need to run outside of a real deployment.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment created by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let test = TestBuilder::new().with_manifest_tables().build().await?;
///
/// let year = test.manifest().insert_year(2025, true).await?;
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by a `MemoryStore`
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any state type constructible from it.
    ///
    /// Avoids a dependency from the test utilities back onto the application crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a fresh session sharing nothing with `self.session`.
    ///
    /// Useful when a test needs a second, anonymous client.
    pub fn new_session(&self) -> Session {
        let store = Arc::new(MemoryStore::default());
        Session::new(None, store, None)
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
