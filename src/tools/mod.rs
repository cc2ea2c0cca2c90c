//! MCP tool implementations.
//!
//! This module contains the database tool handlers:
//! - `query`: execute read-only SQL queries
//! - `schema`: list tables and describe a table's columns
//! - `stats`: row count and size statistics for a table
//! - `sql_guard`: read-only statement validation

pub mod query;
pub mod schema;
pub mod sql_guard;
pub mod stats;

pub use query::{ExecuteQueryInput, QueryOutput, QueryToolHandler};
pub use schema::{GetTableSchemaInput, ListTablesOutput, SchemaToolHandler, TableSchemaOutput};
pub use stats::{GetTableStatsInput, StatsToolHandler, TableStatsOutput};
