//! Query execution tool.
//!
//! Implements the `execute_query` MCP tool. The read-only guard runs before
//! the connection is touched; a rejected statement produces an error
//! envelope, not a fault. Accepted statements run verbatim and the full
//! result set is returned.

use crate::db::{ConnectionManager, QueryExecutor};
use crate::error::DbResult;
use crate::models::QueryResult;
use crate::tools::sql_guard;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::info;

/// Input for the execute_query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExecuteQueryInput {
    /// SQL query to execute (must be a SELECT, WITH, or SHOW statement)
    pub query: String,
}

/// The uniform result envelope for query execution.
///
/// Invariants: `row_count` equals `rows.len()`; `columns` is empty iff
/// `rows` is empty; `error` is set only on read-only rejection envelopes,
/// which carry zero rows.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct QueryOutput {
    /// Result rows as column-name-to-value mappings, in column order
    pub rows: Vec<serde_json::Map<String, JsonValue>>,
    /// Number of rows returned
    pub row_count: usize,
    /// Column names from the first row; empty for an empty result
    pub columns: Vec<String>,
    /// Rejection reason for non-read-only statements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryOutput {
    /// Envelope for a rejected statement. No database call was made.
    pub fn rejection(reason: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            row_count: 0,
            columns: Vec::new(),
            error: Some(reason.into()),
        }
    }
}

impl From<QueryResult> for QueryOutput {
    fn from(result: QueryResult) -> Self {
        let row_count = result.row_count();
        Self {
            rows: result.rows,
            row_count,
            columns: result.columns,
            error: None,
        }
    }
}

/// Handler for query execution.
pub struct QueryToolHandler {
    connection_manager: Arc<ConnectionManager>,
    executor: QueryExecutor,
}

impl QueryToolHandler {
    pub fn new(connection_manager: Arc<ConnectionManager>) -> Self {
        Self {
            connection_manager,
            executor: QueryExecutor::new(),
        }
    }

    /// Handle the execute_query tool call.
    ///
    /// Validation runs first; rejection returns the error envelope without
    /// acquiring the connection. Execution faults propagate to the dispatch
    /// boundary.
    pub async fn execute_query(&self, input: ExecuteQueryInput) -> DbResult<QueryOutput> {
        if let Err(reason) = sql_guard::check_read_only(&input.query) {
            info!(reason = %reason, "Rejected non-read-only query");
            return Ok(QueryOutput::rejection(reason));
        }

        let pool = self.connection_manager.acquire().await?;
        let result = self.executor.fetch_all(&pool, &input.query).await?;

        info!(row_count = result.row_count(), "Query executed");

        Ok(result.into())
    }
}
