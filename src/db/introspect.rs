//! Catalog introspection.
//!
//! All queries target the default `public` schema. Caller-supplied table
//! names are bound as parameters when used as values; when a name must
//! appear as a SQL identifier (the COUNT query) it goes through
//! [`quote_ident`], never string concatenation.

use crate::error::{DbError, DbResult};
use crate::models::{ColumnInfo, TableEntry, TableSchema, TableStats, UNKNOWN_SIZE};
use sqlx::{PgPool, Row};
use tracing::debug;

mod queries {
    pub const LIST_TABLES: &str = r#"
        SELECT table_name, table_type
        FROM information_schema.tables
        WHERE table_schema = 'public'
        ORDER BY table_name
    "#;

    pub const TABLE_COLUMNS: &str = r#"
        SELECT
            column_name,
            data_type,
            character_maximum_length,
            is_nullable,
            column_default
        FROM information_schema.columns
        WHERE table_schema = 'public' AND table_name = $1
        ORDER BY ordinal_position
    "#;

    /// Sizes come from the engine's own formatter. The name binds as text
    /// and casts to regclass server-side.
    pub const TABLE_SIZES: &str = r#"
        SELECT
            pg_size_pretty(pg_total_relation_size($1::text::regclass)) AS total_size,
            pg_size_pretty(pg_relation_size($1::text::regclass)) AS table_size,
            pg_size_pretty(pg_indexes_size($1::text::regclass)) AS indexes_size
    "#;
}

/// Quote a string for use as a SQL identifier: wrap in double quotes and
/// double any embedded quote characters.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Catalog introspection operations.
pub struct SchemaInspector;

impl SchemaInspector {
    /// List all relations in the public schema, ordered by name ascending.
    /// An empty catalog is success with an empty list, never not-found.
    pub async fn list_tables(pool: &PgPool) -> DbResult<Vec<TableEntry>> {
        let rows = sqlx::query(queries::LIST_TABLES)
            .fetch_all(pool)
            .await
            .map_err(DbError::from)?;

        rows.iter()
            .map(|row| {
                Ok(TableEntry {
                    table_name: row.try_get("table_name")?,
                    table_type: row.try_get("table_type")?,
                })
            })
            .collect()
    }

    /// Describe the named table's columns in ordinal order.
    ///
    /// Zero columns means the table does not exist; that is a
    /// distinguishable `None`, not an error.
    pub async fn describe_table(pool: &PgPool, table_name: &str) -> DbResult<Option<TableSchema>> {
        let rows = sqlx::query(queries::TABLE_COLUMNS)
            .bind(table_name)
            .fetch_all(pool)
            .await
            .map_err(DbError::from)?;

        if rows.is_empty() {
            debug!(table = %table_name, "Table not found in catalog");
            return Ok(None);
        }

        let columns = rows
            .iter()
            .map(|row| {
                let is_nullable: String = row.try_get("is_nullable")?;
                Ok(ColumnInfo {
                    column_name: row.try_get("column_name")?,
                    data_type: row.try_get("data_type")?,
                    character_maximum_length: row.try_get("character_maximum_length")?,
                    is_nullable: is_nullable.eq_ignore_ascii_case("YES"),
                    column_default: row.try_get("column_default")?,
                })
            })
            .collect::<DbResult<Vec<_>>>()?;

        Ok(Some(TableSchema {
            table_name: table_name.to_string(),
            columns,
        }))
    }

    /// Gather row count and engine-formatted sizes for the named table.
    ///
    /// If either sub-query yields no row (the table vanished between calls),
    /// the affected fields fall back to an explicit "Unknown" sentinel.
    pub async fn table_stats(pool: &PgPool, table_name: &str) -> DbResult<TableStats> {
        let count_sql = format!("SELECT COUNT(*) AS count FROM {}", quote_ident(table_name));
        let count_row = sqlx::query(&count_sql)
            .fetch_optional(pool)
            .await
            .map_err(DbError::from)?;
        let row_count = match count_row {
            Some(row) => row.try_get("count")?,
            None => 0,
        };

        let size_row = sqlx::query(queries::TABLE_SIZES)
            .bind(table_name)
            .fetch_optional(pool)
            .await
            .map_err(DbError::from)?;

        let (total_size, table_size, indexes_size) = match size_row {
            Some(row) => (
                row.try_get("total_size")?,
                row.try_get("table_size")?,
                row.try_get("indexes_size")?,
            ),
            None => (
                UNKNOWN_SIZE.to_string(),
                UNKNOWN_SIZE.to_string(),
                UNKNOWN_SIZE.to_string(),
            ),
        };

        Ok(TableStats {
            table_name: table_name.to_string(),
            row_count,
            total_size,
            table_size,
            indexes_size,
        })
    }
}
