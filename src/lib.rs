//! PostgreSQL MCP Server Library
//!
//! This library provides MCP (Model Context Protocol) tools for AI assistants
//! to inspect and run read-only queries against a PostgreSQL database.

pub mod config;
pub mod db;
pub mod error;
pub mod mcp;
pub mod models;
pub mod prompts;
pub mod tools;
pub mod transport;

pub use config::Config;
pub use error::DbError;
pub use mcp::PgService;
