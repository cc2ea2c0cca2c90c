//! Read-only query execution.
//!
//! Statements run over the simple (unprepared) protocol so that SHOW and
//! other utility statements work alongside SELECT. The full result set is
//! fetched; this layer injects no LIMIT and imposes no timeout — a caller
//! wanting bounded latency closes the connection externally.

use crate::db::value;
use crate::error::{DbError, DbResult};
use crate::models::QueryResult;
use sqlx::PgPool;
use sqlx::postgres::PgRow;
use tracing::debug;

/// Executes validated read-only statements against the shared session.
pub struct QueryExecutor;

impl QueryExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Execute a statement verbatim and fetch all rows.
    ///
    /// Column names derive from the first row; an empty result set yields an
    /// empty column list, since schema cannot be recovered from zero rows
    /// without a separate metadata query.
    pub async fn fetch_all(&self, pool: &PgPool, sql: &str) -> DbResult<QueryResult> {
        use sqlx::Executor;

        debug!(sql = %sql, "Executing query");

        let rows: Vec<PgRow> = pool.fetch_all(sql).await.map_err(DbError::from)?;

        if rows.is_empty() {
            return Ok(QueryResult::empty());
        }

        let columns = value::column_names(&rows[0]);
        let rows = rows.iter().map(value::row_to_json).collect();

        Ok(QueryResult { columns, rows })
    }
}

impl Default for QueryExecutor {
    fn default() -> Self {
        Self::new()
    }
}
