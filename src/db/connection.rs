//! Single-session connection lifecycle management.
//!
//! The server owns exactly one live PostgreSQL session for its whole
//! lifetime. The pool underneath is capped at one connection, so overlapping
//! tool invocations serialize at the driver level instead of interleaving
//! statements on one session. sqlx runs statements in autocommit; no
//! implicit transaction ever spans calls.
//!
//! A lost or closed session is not reconnected automatically; every
//! subsequent operation fails until the process restarts.

use crate::error::{DbError, DbResult};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::RwLock;
use tracing::info;

/// Loggable description of the connection target. Holds everything needed to
/// identify the session in logs except the credential, which is consumed at
/// connect time and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
}

impl std::fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}/{} (user: {})",
            self.host, self.port, self.database, self.user
        )
    }
}

enum State {
    Disconnected,
    Connected {
        pool: PgPool,
        target: ConnectionTarget,
    },
    Closed,
}

/// Manages the process's single database session.
pub struct ConnectionManager {
    state: RwLock<State>,
}

impl ConnectionManager {
    /// Create a manager with no live session.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::Disconnected),
        }
    }

    /// Establish the single session.
    ///
    /// Fails with a distinct "database unreachable" error when the target
    /// cannot be reached; no retry is attempted. Calling this on an already
    /// connected or closed manager is an error, not a reconnect.
    pub async fn connect(&self, url: &str, target: ConnectionTarget) -> DbResult<()> {
        let mut state = self.state.write().await;
        match *state {
            State::Connected { .. } => {
                return Err(DbError::internal(
                    "Already connected; a second connection attempt requires a restart",
                ));
            }
            State::Closed => return Err(DbError::ConnectionClosed),
            State::Disconnected => {}
        }

        info!(target = %target, "Connecting to PostgreSQL database");

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|e| {
                DbError::connection(
                    format!("Database unreachable at {}: {}", target, e),
                    "Verify the database is running and the connection target is correct",
                )
            })?;

        info!(target = %target, "Connected to PostgreSQL database");
        *state = State::Connected { pool, target };
        Ok(())
    }

    /// Borrow the live session handle.
    pub async fn acquire(&self) -> DbResult<PgPool> {
        match &*self.state.read().await {
            State::Connected { pool, .. } => Ok(pool.clone()),
            State::Disconnected => Err(DbError::connection(
                "Not connected to a database",
                "The server connects at startup; check startup logs for a connection failure",
            )),
            State::Closed => Err(DbError::ConnectionClosed),
        }
    }

    /// The target descriptor of the live session, if any.
    pub async fn target(&self) -> Option<ConnectionTarget> {
        match &*self.state.read().await {
            State::Connected { target, .. } => Some(target.clone()),
            _ => None,
        }
    }

    /// Whether a live session exists.
    pub async fn is_connected(&self) -> bool {
        matches!(&*self.state.read().await, State::Connected { .. })
    }

    /// Tear the session down. Closing an already-closed or never-opened
    /// manager is a no-op; in-flight work on the session is aborted and all
    /// subsequent operations fail with a "connection closed" error.
    pub async fn close(&self) {
        let mut state = self.state.write().await;
        if let State::Connected { pool, target } = std::mem::replace(&mut *state, State::Closed) {
            pool.close().await;
            info!(target = %target, "Database connection closed");
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_target() -> ConnectionTarget {
        ConnectionTarget {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            user: "postgres".to_string(),
        }
    }

    #[test]
    fn test_target_display_has_no_credential_slot() {
        let rendered = test_target().to_string();
        assert_eq!(rendered, "localhost:5432/postgres (user: postgres)");
    }

    #[tokio::test]
    async fn test_acquire_before_connect_fails() {
        let manager = ConnectionManager::new();
        let err = manager.acquire().await.unwrap_err();
        assert!(matches!(err, DbError::Connection { .. }));
        assert!(!manager.is_connected().await);
    }

    #[tokio::test]
    async fn test_close_never_opened_is_noop() {
        let manager = ConnectionManager::new();
        manager.close().await;
        manager.close().await;
        let err = manager.acquire().await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionClosed));
    }

    #[tokio::test]
    async fn test_connect_after_close_is_rejected() {
        let manager = ConnectionManager::new();
        manager.close().await;
        let err = manager
            .connect("postgresql://u:p@localhost/db", test_target())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ConnectionClosed));
    }

    #[tokio::test]
    async fn test_target_absent_when_disconnected() {
        let manager = ConnectionManager::new();
        assert!(manager.target().await.is_none());
    }
}
