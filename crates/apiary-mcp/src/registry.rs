//! Tool registry trait for MCP servers.
//!
//! [`ToolRegistry`] is the seam between the protocol layer and whatever
//! answers tool calls. [`ApiaryMcpServer`](crate::ApiaryMcpServer)
//! delegates `list_tools` and `call_tool` to the registry it holds.

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Type alias for async tool handler results.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// Trait for listing and dispatching MCP tools.
///
/// # Example
///
/// ```rust,ignore
/// struct MyTools { /* ... */ }
///
/// impl ToolRegistry for MyTools {
///     fn tools(&self) -> Vec<Tool> {
///         vec![/* tool definitions */]
///     }
///
///     fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
///         match name {
///             "my_tool" => Some(Box::pin(self.handle_my_tool(args))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Returns information about all available tools, in a stable order.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatches a tool call by name.
    ///
    /// Returns `None` if the tool is not recognized by this registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Returns the number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Check if a tool exists by name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

// ============================================================================
// Tests
// ============================================================================
