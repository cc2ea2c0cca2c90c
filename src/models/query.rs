//! Query result models.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// The result of a read-only query: ordered rows plus the column names.
///
/// Column names derive from the first row, so `columns` is empty exactly
/// when `rows` is empty. Schema cannot be recovered from zero rows without a
/// separate metadata query; callers needing column names for empty results
/// should use `get_table_schema` instead.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<serde_json::Map<String, JsonValue>>,
}

impl QueryResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Get the number of rows in the result.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_has_no_columns() {
        let result = QueryResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.row_count(), 0);
        assert!(result.columns.is_empty());
    }

    #[test]
    fn test_row_count_matches_rows() {
        let mut row = serde_json::Map::new();
        row.insert("id".to_string(), JsonValue::Number(1.into()));
        let result = QueryResult {
            columns: vec!["id".to_string()],
            rows: vec![row.clone(), row],
        };
        assert_eq!(result.row_count(), result.rows.len());
        assert_eq!(result.row_count(), 2);
    }
}
