//! MCP server exposing Apiary endpoints as tools.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      apiary-mcp                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait: tool listing and dispatch              │
//! │  EndpointTools: one tool per endpoint descriptor            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ApiaryMcpServer: generic server (implements ServerHandler) │
//! │  ServerConfig: server metadata (name, version, instructions)│
//! ├─────────────────────────────────────────────────────────────┤
//! │  McpErrorExt: apiary errors → rmcp::ErrorData               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use apiary_client::{ApiClient, ClientConfig};
//! use apiary_core::EndpointRegistry;
//! use apiary_mcp::{ApiaryMcpServer, EndpointTools};
//!
//! let client = ApiClient::new(ClientConfig::new().with_news_api_key(key))?;
//! let tools = EndpointTools::new(EndpointRegistry::builtin(), client);
//!
//! ApiaryMcpServer::new(tools).serve_stdio().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod server;
pub mod tools;

// Re-exports: registry
pub use registry::{ToolRegistry, ToolResult};

// Re-exports: server
pub use server::{ApiaryMcpServer, DEFAULT_SERVER_NAME, ServerConfig};

// Re-exports: error
pub use error::{Error, McpErrorExt, Result, unknown_tool};

// Re-exports: tools
pub use tools::{EndpointTools, to_tool};
