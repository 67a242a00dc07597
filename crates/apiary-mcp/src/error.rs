//! Error types for apiary-mcp, and their mapping onto MCP protocol errors.

use rmcp::model::{ErrorCode, ErrorData};
use thiserror::Error;

/// Result type alias for apiary-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The MCP transport failed to start or stopped abnormally
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Creates a transport error.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Error::Transport(message.into())
    }
}

/// Conversion into the protocol error returned for a failed tool call.
pub trait McpErrorExt {
    /// Map into `INTERNAL_ERROR` with an `API call failed:` prefix.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for apiary_client::Error {
    fn to_mcp_error(&self) -> ErrorData {
        ErrorData::internal_error(format!("API call failed: {self}"), None)
    }
}

/// `METHOD_NOT_FOUND` for a tool name no registry recognizes.
pub fn unknown_tool(name: &str) -> ErrorData {
    ErrorData::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Unknown tool: {name}"),
        None,
    )
}
