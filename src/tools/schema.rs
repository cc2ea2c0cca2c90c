//! Schema introspection tools.
//!
//! Implements the `list_tables` and `get_table_schema` MCP tools. An unknown
//! table name is a distinguishable not-found result with an empty column
//! sequence, never an error — callers branch on it.

use crate::db::{ConnectionManager, SchemaInspector};
use crate::error::DbResult;
use crate::models::{ColumnInfo, TableEntry, TableSchema};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Output from the list_tables tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ListTablesOutput {
    /// Tables and views in the public schema, ordered by name ascending
    pub tables: Vec<TableEntry>,
    /// Number of tables returned
    pub count: usize,
}

/// Input for the get_table_schema tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTableSchemaInput {
    /// Name of the table to describe
    pub table_name: String,
}

/// Output from the get_table_schema tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TableSchemaOutput {
    /// Name of the described table
    pub table_name: String,
    /// Column definitions in ordinal order; empty when the table is unknown
    pub columns: Vec<ColumnInfo>,
    /// Number of columns returned
    pub column_count: usize,
    /// Set when the table was not found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TableSchemaOutput {
    /// Not-found result: success-shaped, distinguishable, zero columns.
    pub fn not_found(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        Self {
            error: Some(format!("Table '{}' not found", table_name)),
            table_name,
            columns: Vec::new(),
            column_count: 0,
        }
    }
}

impl From<TableSchema> for TableSchemaOutput {
    fn from(schema: TableSchema) -> Self {
        let column_count = schema.columns.len();
        Self {
            table_name: schema.table_name,
            columns: schema.columns,
            column_count,
            error: None,
        }
    }
}

/// Handler for schema introspection.
pub struct SchemaToolHandler {
    connection_manager: Arc<ConnectionManager>,
}

impl SchemaToolHandler {
    pub fn new(connection_manager: Arc<ConnectionManager>) -> Self {
        Self { connection_manager }
    }

    /// Handle the list_tables tool call. Always succeeds with an empty list
    /// when the catalog holds no tables.
    pub async fn list_tables(&self) -> DbResult<ListTablesOutput> {
        let pool = self.connection_manager.acquire().await?;
        let tables = SchemaInspector::list_tables(&pool).await?;
        let count = tables.len();

        info!(count = count, "Listed tables");

        Ok(ListTablesOutput { tables, count })
    }

    /// Handle the get_table_schema tool call.
    pub async fn get_table_schema(&self, input: GetTableSchemaInput) -> DbResult<TableSchemaOutput> {
        let pool = self.connection_manager.acquire().await?;

        match SchemaInspector::describe_table(&pool, &input.table_name).await? {
            Some(schema) => {
                info!(
                    table = %input.table_name,
                    columns = schema.columns.len(),
                    "Described table"
                );
                Ok(schema.into())
            }
            None => {
                info!(table = %input.table_name, "Table not found");
                Ok(TableSchemaOutput::not_found(input.table_name))
            }
        }
    }
}
