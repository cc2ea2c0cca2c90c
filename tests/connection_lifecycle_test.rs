//! Integration tests for the connection lifecycle state machine.
//!
//! None of these need a live server: they exercise the transitions that are
//! observable without I/O (use-before-connect, close, use-after-close).

use pg_mcp_server::db::{ConnectionManager, ConnectionTarget};
use pg_mcp_server::error::DbError;

fn target() -> ConnectionTarget {
    ConnectionTarget {
        host: "localhost".to_string(),
        port: 5432,
        database: "postgres".to_string(),
        user: "postgres".to_string(),
    }
}

/// Acquiring before connect is a connection fault.
#[tokio::test]
async fn test_acquire_before_connect_fails() {
    let manager = ConnectionManager::new();
    let err = manager.acquire().await.unwrap_err();
    assert!(err.is_connection_fault());
}

/// Close on a never-connected manager is a harmless no-op, and stays
/// idempotent on repetition.
#[tokio::test]
async fn test_close_is_idempotent() {
    let manager = ConnectionManager::new();
    manager.close().await;
    manager.close().await;
    assert!(!manager.is_connected().await);
}

/// After close, the session never reopens: acquire and connect both fail.
#[tokio::test]
async fn test_closed_is_terminal() {
    let manager = ConnectionManager::new();
    manager.close().await;

    let err = manager.acquire().await.unwrap_err();
    assert!(matches!(
        err,
        DbError::ConnectionClosed | DbError::Connection { .. }
    ));

    let err = manager
        .connect("postgresql://postgres:pw@localhost:5432/postgres", target())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::ConnectionClosed));
}

/// The target descriptor is only available while connected.
#[tokio::test]
async fn test_target_absent_when_disconnected() {
    let manager = ConnectionManager::new();
    assert!(manager.target().await.is_none());
}

/// The Display form of a target carries host, port, database, and user but
/// has no slot for a credential.
#[test]
fn test_target_display_shape() {
    let rendered = target().to_string();
    assert_eq!(rendered, "localhost:5432/postgres (user: postgres)");
}
