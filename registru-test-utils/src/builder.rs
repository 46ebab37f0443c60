//! Declarative test setup.
//!
//! Configuration methods only queue work; tables and fixtures are created when
//! `build()` runs.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for test environments.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_manifest_tables: bool,
    include_user_table: bool,
    years: Vec<(i32, bool)>,
    users: Vec<(String, String)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_manifest_tables: false,
            include_user_table: false,
            years: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Create every table the manifest search touches.
    ///
    /// DatabaseYear, Pavilion, Ship, ContainerType and ManifestEntry, in dependency order.
    pub fn with_manifest_tables(mut self) -> Self {
        self.include_manifest_tables = true;
        self
    }

    /// Create the `auth_user` table.
    pub fn with_user_table(mut self) -> Self {
        self.include_user_table = true;
        self
    }

    /// Add a custom entity table.
    ///
    /// ```no_run
    /// use registru_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), registru_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::DatabaseYear)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a registry year. Implies the manifest tables.
    pub fn with_year(mut self, year: i32, is_active: bool) -> Self {
        self.include_manifest_tables = true;
        self.years.push((year, is_active));
        self
    }

    /// Insert a staff account with an already hashed password. Implies the user table.
    pub fn with_user(mut self, username: &str, password_hash: &str) -> Self {
        self.include_user_table = true;
        self.users
            .push((username.to_string(), password_hash.to_string()));
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut stmts = Vec::new();
        if self.include_manifest_tables {
            stmts.push(schema.create_table_from_entity(entity::prelude::DatabaseYear));
            stmts.push(schema.create_table_from_entity(entity::prelude::Pavilion));
            stmts.push(schema.create_table_from_entity(entity::prelude::Ship));
            stmts.push(schema.create_table_from_entity(entity::prelude::ContainerType));
            stmts.push(schema.create_table_from_entity(entity::prelude::ManifestEntry));
        }
        if self.include_user_table {
            stmts.push(schema.create_table_from_entity(entity::prelude::AuthUser));
        }
        stmts.extend(self.tables);

        context.with_tables(stmts).await?;

        for (year, is_active) in self.years {
            context.manifest().insert_year(year, is_active).await?;
        }

        for (username, password_hash) in self.users {
            context.user().insert_user(&username, &password_hash).await?;
        }

        Ok(context)
    }
}
