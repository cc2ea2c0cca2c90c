//! Database access layer.
//!
//! This module provides:
//! - Single-session connection lifecycle management
//! - Read-only query execution
//! - Catalog introspection
//! - Row-to-JSON value decoding

pub mod connection;
pub mod executor;
pub mod introspect;
pub mod value;

pub use connection::{ConnectionManager, ConnectionTarget};
pub use executor::QueryExecutor;
pub use introspect::{SchemaInspector, quote_ident};
