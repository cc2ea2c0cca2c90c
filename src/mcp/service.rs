//! MCP service implementation using rmcp.
//!
//! This module defines the PgService struct exposing the database tools and
//! prompt templates over the MCP protocol using the rmcp framework's macros.
//! Faults from the handlers are logged and mapped to protocol errors here,
//! at the dispatch boundary; soft results (read-only rejection, unknown
//! table) pass through as success payloads.

use crate::db::ConnectionManager;
use crate::error::DbError;
use crate::prompts;
use crate::tools::query::{ExecuteQueryInput, QueryOutput, QueryToolHandler};
use crate::tools::schema::{
    GetTableSchemaInput, ListTablesOutput, SchemaToolHandler, TableSchemaOutput,
};
use crate::tools::stats::{GetTableStatsInput, StatsToolHandler, TableStatsOutput};
use rmcp::Json;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, PromptMessage, PromptMessageRole, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct PgService {
    /// Shared connection manager for all database operations
    connection_manager: Arc<ConnectionManager>,
    /// Tool router for MCP tool dispatch (auto-generated)
    tool_router: ToolRouter<Self>,
}

impl PgService {
    pub fn new(connection_manager: Arc<ConnectionManager>) -> Self {
        Self {
            connection_manager,
            tool_router: Self::tool_router(),
        }
    }

    fn fault(&self, tool: &'static str, err: DbError) -> McpError {
        error!(tool = tool, error = %err, "Tool call failed");
        err.into()
    }
}

#[tool_router]
impl PgService {
    #[tool(
        description = "Execute a read-only SQL query against the database.\nOnly SELECT, WITH, and SHOW statements are accepted; anything else returns an error field instead of results."
    )]
    async fn execute_query(
        &self,
        Parameters(input): Parameters<ExecuteQueryInput>,
    ) -> Result<Json<QueryOutput>, McpError> {
        let handler = QueryToolHandler::new(self.connection_manager.clone());
        handler
            .execute_query(input)
            .await
            .map(Json)
            .map_err(|e| self.fault("execute_query", e))
    }

    #[tool(
        description = "List all tables and views in the public schema.\nReturns table names and types, ordered by name."
    )]
    async fn list_tables(&self) -> Result<Json<ListTablesOutput>, McpError> {
        let handler = SchemaToolHandler::new(self.connection_manager.clone());
        handler
            .list_tables()
            .await
            .map(Json)
            .map_err(|e| self.fault("list_tables", e))
    }

    #[tool(
        description = "Get column definitions for a table.\nReturns name, data type, max length, nullability, and default for each column in ordinal order.\nAn unknown table returns an error field with an empty column list."
    )]
    async fn get_table_schema(
        &self,
        Parameters(input): Parameters<GetTableSchemaInput>,
    ) -> Result<Json<TableSchemaOutput>, McpError> {
        let handler = SchemaToolHandler::new(self.connection_manager.clone());
        handler
            .get_table_schema(input)
            .await
            .map(Json)
            .map_err(|e| self.fault("get_table_schema", e))
    }

    #[tool(
        description = "Get statistics for a table: exact row count plus total, table, and index sizes as human-readable strings."
    )]
    async fn get_table_stats(
        &self,
        Parameters(input): Parameters<GetTableStatsInput>,
    ) -> Result<Json<TableStatsOutput>, McpError> {
        let handler = StatsToolHandler::new(self.connection_manager.clone());
        handler
            .get_table_stats(input)
            .await
            .map(Json)
            .map_err(|e| self.fault("get_table_stats", e))
    }
}

#[tool_handler]
impl ServerHandler for PgService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "pg-mcp-server".to_owned(),
                title: Some("PostgreSQL MCP Server".to_owned()),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Read-only tools for exploring a PostgreSQL database.\n\
                \n\
                ## Tools\n\
                - `list_tables`: tables and views in the public schema\n\
                - `get_table_schema`: column definitions for one table\n\
                - `get_table_stats`: row count and on-disk sizes for one table\n\
                - `execute_query`: run a SELECT, WITH, or SHOW statement\n\
                \n\
                ## Notes\n\
                - The server is read-only: INSERT, UPDATE, DELETE, and DDL are rejected\n\
                - `execute_query` returns the full result set; add LIMIT for large tables\n\
                - Start with `list_tables`, then `get_table_schema` before querying\n\
                \n\
                ## Prompts\n\
                - `analyze_table`: guided single-table analysis (takes table_name)\n\
                - `find_relationships`: infer the data model across tables\n\
                - `data_quality_check`: database-wide quality audit"
                    .to_string(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: prompts::prompt_list(),
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let (description, text) = match request.name.as_str() {
            prompts::ANALYZE_TABLE => {
                let table_name = request
                    .arguments
                    .as_ref()
                    .and_then(|args| args.get("table_name"))
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        McpError::invalid_params(
                            "table_name argument is required for analyze_table",
                            None,
                        )
                    })?;
                (
                    "Guided analysis of a single table",
                    prompts::analyze_table(table_name),
                )
            }
            prompts::FIND_RELATIONSHIPS => (
                "Discover relationships between tables",
                prompts::find_relationships(),
            ),
            prompts::DATA_QUALITY_CHECK => (
                "Database-wide data quality audit",
                prompts::data_quality_check(),
            ),
            other => {
                return Err(McpError::invalid_params(
                    format!("Unknown prompt: {other}"),
                    None,
                ));
            }
        };

        Ok(GetPromptResult {
            description: Some(description.to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
