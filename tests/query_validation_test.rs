//! Integration tests for query validation.
//!
//! These tests verify the read-only guard end to end through the query tool:
//! rejected statements produce a success-shaped envelope with an error field
//! and never touch the database connection.

use pg_mcp_server::db::ConnectionManager;
use pg_mcp_server::tools::query::{ExecuteQueryInput, QueryToolHandler};
use pg_mcp_server::tools::sql_guard::{READ_ONLY_VIOLATION, check_read_only};
use std::sync::Arc;

fn handler() -> QueryToolHandler {
    // Never connected: any attempt to reach the database would fail loudly
    QueryToolHandler::new(Arc::new(ConnectionManager::new()))
}

async fn run(sql: &str) -> pg_mcp_server::tools::query::QueryOutput {
    handler()
        .execute_query(ExecuteQueryInput {
            query: sql.to_string(),
        })
        .await
        .expect("rejection must be a soft result, not a fault")
}

/// Write statements come back as an error envelope, not an Err.
#[tokio::test]
async fn test_writes_rejected_as_envelope() {
    for sql in [
        "INSERT INTO users (name) VALUES ('test')",
        "UPDATE users SET name = 'changed' WHERE id = 1",
        "DELETE FROM users WHERE id = 1",
        "CREATE TABLE test (id INT PRIMARY KEY)",
        "DROP TABLE users",
        "TRUNCATE users",
        "ALTER TABLE users ADD COLUMN age INT",
        "GRANT ALL ON users TO public",
    ] {
        let output = run(sql).await;
        assert_eq!(
            output.error.as_deref(),
            Some(READ_ONLY_VIOLATION),
            "expected rejection for: {sql}"
        );
        assert_eq!(output.row_count, 0);
        assert!(output.rows.is_empty());
        assert!(output.columns.is_empty());
    }
}

/// Rejection happens before any connection is acquired: the handler above
/// has no connection at all, yet rejected statements still succeed.
#[tokio::test]
async fn test_rejection_precedes_connection_use() {
    let output = run("DELETE FROM users").await;
    assert!(output.error.is_some());
}

/// Accepted prefixes reach the execution path, which faults on the
/// unconnected manager rather than returning an envelope.
#[tokio::test]
async fn test_accepted_statements_reach_execution() {
    for sql in [
        "SELECT * FROM users",
        "select 1",
        "  WITH t AS (SELECT 1) SELECT * FROM t",
        "SHOW server_version",
    ] {
        let result = handler()
            .execute_query(ExecuteQueryInput {
                query: sql.to_string(),
            })
            .await;
        assert!(result.is_err(), "expected connection fault for: {sql}");
    }
}

/// Case-insensitive matching with original casing preserved for execution.
#[test]
fn test_guard_is_case_insensitive() {
    assert!(check_read_only("sElEcT 1").is_ok());
    assert!(check_read_only("with t as (select 1) select * from t").is_ok());
    assert!(check_read_only("Show all").is_ok());
}

/// Statements behind leading comments are rejected; the guard does not
/// strip comments.
#[test]
fn test_comment_prefixes_rejected() {
    assert!(check_read_only("-- just a comment\nSELECT 1").is_err());
    assert!(check_read_only("/* c */ SELECT 1").is_err());
}

/// Empty and whitespace-only input is rejected.
#[test]
fn test_empty_input_rejected() {
    assert!(check_read_only("").is_err());
    assert!(check_read_only(" \n\t ").is_err());
}
