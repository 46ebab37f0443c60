//! Raw, parameterized SQL with rows returned as JSON objects.
//!
//! SQL is written with `?` placeholders; they are rewritten to `$1, $2, ...` when the
//! connection is PostgreSQL. Values are always bound, never interpolated.

use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, JsonValue, Statement, Value};

pub struct QueryHelper<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QueryHelper<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn statement(&self, sql: &str, params: Vec<Value>) -> Statement {
        let backend = self.db.get_database_backend();

        Statement::from_sql_and_values(backend, rewrite_placeholders(sql, backend), params)
    }

    /// Run `sql` and return every row.
    pub async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Vec<JsonValue>, DbErr> {
        JsonValue::find_by_statement(self.statement(sql, params))
            .all(self.db)
            .await
    }

    /// First row, if any.
    pub async fn fetch_one(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<JsonValue>, DbErr> {
        JsonValue::find_by_statement(self.statement(sql, params))
            .one(self.db)
            .await
    }

    /// Every row.
    pub async fn fetch_all(&self, sql: &str, params: Vec<Value>) -> Result<Vec<JsonValue>, DbErr> {
        self.query(sql, params).await
    }
}

/// Rewrite `?` placeholders for `backend`, leaving quoted literals untouched.
pub fn rewrite_placeholders(sql: &str, backend: DbBackend) -> String {
    if backend != DbBackend::Postgres {
        return sql.to_string();
    }

    let mut rewritten = String::with_capacity(sql.len() + 8);
    let mut index = 0;
    let mut in_single = false;
    let mut in_double = false;

    for c in sql.chars() {
        match c {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '?' if !in_single && !in_double => {
                index += 1;
                rewritten.push('$');
                rewritten.push_str(&index.to_string());
                continue;
            }
            _ => {}
        }

        rewritten.push(c);
    }

    rewritten
}
