//! Schema introspection models.
//!
//! These mirror the PostgreSQL catalog shapes: `information_schema.tables`
//! for table listings and `information_schema.columns` for column
//! descriptions, plus the size statistics reported by the engine itself.

use schemars::JsonSchema;
use serde::Serialize;

/// Sentinel for size values the catalog could not report, e.g. when the
/// table vanished between sub-queries.
pub const UNKNOWN_SIZE: &str = "Unknown";

/// One relation in the default schema.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TableEntry {
    pub table_name: String,
    /// "BASE TABLE" or "VIEW", verbatim from the catalog
    pub table_type: String,
}

/// One column of a table, in catalog ordinal order.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ColumnInfo {
    pub column_name: String,
    /// Declared data type (e.g. "integer", "character varying")
    pub data_type: String,
    /// Maximum length for character types, None otherwise
    pub character_maximum_length: Option<i32>,
    pub is_nullable: bool,
    /// Default-value expression, verbatim from the catalog
    pub column_default: Option<String>,
}

/// A table's full column layout. Columns are ordered by ordinal position.
#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    pub table_name: String,
    pub columns: Vec<ColumnInfo>,
}

/// Statistics for one table. Sizes are the engine's own human-readable
/// strings (`pg_size_pretty`), never recomputed locally.
#[derive(Debug, Clone, Serialize)]
pub struct TableStats {
    pub table_name: String,
    pub row_count: i64,
    pub total_size: String,
    pub table_size: String,
    pub indexes_size: String,
}
