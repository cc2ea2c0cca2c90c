//! Data models shared between the database layer and the MCP tools.

pub mod query;
pub mod schema;

pub use query::QueryResult;
pub use schema::{ColumnInfo, TableEntry, TableSchema, TableStats, UNKNOWN_SIZE};
