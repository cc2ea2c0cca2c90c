//! Transport layer for the MCP server.
//!
//! Two transports are provided:
//! - Stdio: standard input/output for CLI integration
//! - HTTP: Streamable HTTP with SSE for web clients

pub mod http;
pub mod stdio;

pub use http::HttpTransport;
pub use stdio::StdioTransport;

use crate::error::DbResult;
use std::future::Future;

/// Trait for MCP transport implementations.
///
/// A transport owns the session lifecycle: it serves the protocol until
/// shutdown and closes the database session before returning.
pub trait Transport: Send + Sync {
    /// Start the transport and block until it shuts down.
    fn run(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Transport name for logging.
    fn name(&self) -> &'static str;
}
