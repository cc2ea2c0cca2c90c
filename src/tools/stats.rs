//! Table statistics tool.
//!
//! Implements the `get_table_stats` MCP tool: a row count plus the engine's
//! own human-readable size strings.

use crate::db::{ConnectionManager, SchemaInspector};
use crate::error::DbResult;
use crate::models::TableStats;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Input for the get_table_stats tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTableStatsInput {
    /// Name of the table to analyze
    pub table_name: String,
}

/// Output from the get_table_stats tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TableStatsOutput {
    pub table_name: String,
    /// Exact row count (COUNT(*), not an estimate)
    pub row_count: i64,
    /// Total relation size including indexes, engine-formatted
    pub total_size: String,
    /// Heap size, engine-formatted
    pub table_size: String,
    /// Combined index size, engine-formatted
    pub indexes_size: String,
}

impl From<TableStats> for TableStatsOutput {
    fn from(stats: TableStats) -> Self {
        Self {
            table_name: stats.table_name,
            row_count: stats.row_count,
            total_size: stats.total_size,
            table_size: stats.table_size,
            indexes_size: stats.indexes_size,
        }
    }
}

/// Handler for table statistics.
pub struct StatsToolHandler {
    connection_manager: Arc<ConnectionManager>,
}

impl StatsToolHandler {
    pub fn new(connection_manager: Arc<ConnectionManager>) -> Self {
        Self { connection_manager }
    }

    /// Handle the get_table_stats tool call.
    pub async fn get_table_stats(&self, input: GetTableStatsInput) -> DbResult<TableStatsOutput> {
        let pool = self.connection_manager.acquire().await?;
        let stats = SchemaInspector::table_stats(&pool, &input.table_name).await?;

        info!(
            table = %input.table_name,
            row_count = stats.row_count,
            "Gathered table stats"
        );

        Ok(stats.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_SIZE;

    #[test]
    fn test_stats_output_serialization() {
        let output: TableStatsOutput = TableStats {
            table_name: "users".to_string(),
            row_count: 0,
            total_size: "16 kB".to_string(),
            table_size: "8192 bytes".to_string(),
            indexes_size: "8192 bytes".to_string(),
        }
        .into();

        let json = serde_json::to_value(&output).unwrap();
        // An empty table still occupies catalog-reported storage
        assert_eq!(json["row_count"], 0);
        assert_ne!(json["total_size"], UNKNOWN_SIZE);
        assert_eq!(json["table_size"], "8192 bytes");
    }

    #[tokio::test]
    async fn test_stats_surfaces_connection_fault() {
        let handler = StatsToolHandler::new(Arc::new(ConnectionManager::new()));
        let err = handler
            .get_table_stats(GetTableStatsInput {
                table_name: "users".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_connection_fault());
    }
}
