//! The MCP server.
//!
//! [`ApiaryMcpServer`] implements rmcp's `ServerHandler` on top of any
//! [`ToolRegistry`] and serves it over stdio.

use crate::error::{Error, Result, unknown_tool};
use crate::registry::ToolRegistry;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, JsonObject,
    ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Name reported during the MCP handshake.
pub const DEFAULT_SERVER_NAME: &str = "api-mcp-server";

const DEFAULT_INSTRUCTIONS: &str = "Each tool performs one HTTP GET against a public API \
     and returns the response as JSON text. Pass the parameters listed in the tool's \
     input schema as strings; numbers and booleans are also accepted and sent as their \
     text form.";

/// Server metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Usage hints for the client.
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: Some(DEFAULT_INSTRUCTIONS.to_string()),
        }
    }
}

/// MCP server delegating tool listing and dispatch to a registry.
pub struct ApiaryMcpServer<R> {
    registry: Arc<R>,
    config: ServerConfig,
}

impl<R> Clone for ApiaryMcpServer<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: self.config.clone(),
        }
    }
}

impl<R: ToolRegistry + 'static> ApiaryMcpServer<R> {
    /// Create a server with the default configuration.
    pub fn new(registry: R) -> Self {
        Self {
            registry: Arc::new(registry),
            config: ServerConfig::default(),
        }
    }

    /// Set the server name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the server version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the instructions sent to clients.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.config.instructions = Some(instructions.into());
        self
    }

    /// Server metadata.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The registry being served.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The full tool listing, in registry order.
    pub fn list_tools_result(&self) -> ListToolsResult {
        let tools = self.registry.tools();
        debug!(count = tools.len(), "Listing tools");
        ListToolsResult::with_all_items(tools)
    }

    /// Run a tool by name.
    ///
    /// Absent arguments are treated as an empty object.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let args = Value::Object(arguments.unwrap_or_default());
        match self.registry.call(name, args) {
            Some(future) => future.await,
            None => {
                warn!(tool = %name, "Unknown tool requested");
                Err(unknown_tool(name))
            }
        }
    }

    /// Serve over stdin/stdout until the client disconnects or Ctrl-C.
    pub async fn serve_stdio(self) -> Result<()> {
        info!(
            name = %self.config.name,
            version = %self.config.version,
            tools = self.registry.tool_count(),
            "Starting MCP server on stdio transport"
        );

        let transport = (tokio::io::stdin(), tokio::io::stdout());
        let service = rmcp::ServiceExt::serve(self, transport)
            .await
            .map_err(|e| Error::transport(format!("failed to start server: {e}")))?;

        let cancel = service.cancellation_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupt received, shutting down");
                cancel.cancel();
            }
        });

        let quit_reason = service
            .waiting()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        info!(?quit_reason, "Server stopped");
        Ok(())
    }
}

impl<R: ToolRegistry + 'static> ServerHandler for ApiaryMcpServer<R> {
    fn get_info(&self) -> ServerInfo {
        let info = ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::new(
                self.config.name.clone(),
                self.config.version.clone(),
            ));
        match &self.config.instructions {
            Some(instructions) => info.with_instructions(instructions.clone()),
            None => info,
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(self.list_tools_result())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::ToolResult;
    use rmcp::model::{Content, ErrorCode, Tool};

    struct FixedTools;

    impl ToolRegistry for FixedTools {
        fn tools(&self) -> Vec<Tool> {
            vec![Tool::new(
                "echo",
                "Echo the arguments",
                Arc::new(JsonObject::new()),
            )]
        }

        fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
            (name == "echo").then(|| -> ToolResult {
                Box::pin(async move {
                    Ok(CallToolResult::success(vec![Content::text(
                        args.to_string(),
                    )]))
                })
            })
        }
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.name, "api-mcp-server");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert!(config.instructions.is_some());
    }

    #[test]
    fn test_builder_overrides() {
        let server = ApiaryMcpServer::new(FixedTools)
            .with_name("custom")
            .with_version("9.9.9")
            .with_instructions("hi");
        assert_eq!(server.config().name, "custom");
        assert_eq!(server.config().version, "9.9.9");
        assert_eq!(server.config().instructions.as_deref(), Some("hi"));
    }

    #[test]
    fn test_get_info() {
        let info = ApiaryMcpServer::new(FixedTools).get_info();
        assert_eq!(info.server_info.name, "api-mcp-server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.instructions.as_deref(), Some(DEFAULT_INSTRUCTIONS));
    }

    #[test]
    fn test_get_info_custom_metadata() {
        let info = ApiaryMcpServer::new(FixedTools)
            .with_name("custom")
            .with_version("2.0.0")
            .with_instructions("use it")
            .get_info();
        assert_eq!(info.server_info.name, "custom");
        assert_eq!(info.server_info.version, "2.0.0");
        assert_eq!(info.instructions.as_deref(), Some("use it"));
    }

    #[test]
    fn test_instructions_mention_scalar_arguments() {
        assert!(DEFAULT_INSTRUCTIONS.contains("numbers and booleans"));
    }

    #[test]
    fn test_list_tools_result() {
        let result = ApiaryMcpServer::new(FixedTools).list_tools_result();
        assert_eq!(result.tools.len(), 1);
        assert_eq!(result.tools[0].name, "echo");
        assert!(result.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_known_tool() {
        let server = ApiaryMcpServer::new(FixedTools);
        let result = server.dispatch("echo", None).await.unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let server = ApiaryMcpServer::new(FixedTools);
        let err = server.dispatch("weather", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: weather");
    }

    #[test]
    fn test_clone_shares_registry() {
        let server = ApiaryMcpServer::new(FixedTools);
        let clone = server.clone();
        assert!(Arc::ptr_eq(&server.registry, &clone.registry));
    }
}
