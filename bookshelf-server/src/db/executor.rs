//! Parameterized query execution over the pool
//!
//! Every call checks out exactly one connection, runs one statement on it,
//! and hands the connection back before returning. Errors are the driver's,
//! unchanged: no retry and no translation happens here.

use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{FromRow, MySqlPool};

/// Positional parameter bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    UInt(u64),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for SqlParam {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

/// Runs fixed SQL templates against pooled connections
#[derive(Clone)]
pub struct QueryExecutor {
    pool: MySqlPool,
}

impl QueryExecutor {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Run `sql` and map every row to `T`.
    pub async fn fetch_all<T>(&self, sql: &'static str, params: &[SqlParam]) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        tracing::debug!(sql, params = params.len(), "fetch_all");
        // The connection goes back to the pool when `conn` drops, on every path.
        // See `connection_released_after_query_error` (needs a database).
        let mut conn = self.pool.acquire().await?;
        bind_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_all(&mut *conn)
            .await
    }

    /// Run `sql` and map the first row to `T`, if any.
    pub async fn fetch_optional<T>(
        &self,
        sql: &'static str,
        params: &[SqlParam],
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        tracing::debug!(sql, params = params.len(), "fetch_optional");
        let mut conn = self.pool.acquire().await?;
        bind_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Run a single-column, single-row query such as `count(*)`.
    pub async fn fetch_scalar(&self, sql: &'static str, params: &[SqlParam]) -> Result<i64, sqlx::Error> {
        tracing::debug!(sql, params = params.len(), "fetch_scalar");
        let mut conn = self.pool.acquire().await?;
        bind_scalar(sqlx::query_scalar::<_, i64>(sql), params)
            .fetch_one(&mut *conn)
            .await
    }
}

fn bind_as<'q, O>(
    mut query: QueryAs<'q, MySql, O, MySqlArguments>,
    params: &'q [SqlParam],
) -> QueryAs<'q, MySql, O, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::UInt(value) => query.bind(*value),
        };
    }
    query
}

fn bind_scalar<'q, O>(
    mut query: QueryScalar<'q, MySql, O, MySqlArguments>,
    params: &'q [SqlParam],
) -> QueryScalar<'q, MySql, O, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::UInt(value) => query.bind(*value),
        };
    }
    query
}
