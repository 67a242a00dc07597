//! The endpoint dispatcher.
//!
//! Every descriptor of an [`EndpointRegistry`] becomes one MCP tool. A call
//! runs the endpoint through [`ApiClient::call`] and returns the payload as
//! pretty-printed JSON text.

use crate::error::McpErrorExt;
use crate::registry::{ToolRegistry, ToolResult};
use apiary_client::ApiClient;
use apiary_core::{Arguments, EndpointRegistry, ToolDescription, project};
use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Exposes an [`EndpointRegistry`] as MCP tools.
#[derive(Clone, Debug)]
pub struct EndpointTools {
    registry: Arc<EndpointRegistry>,
    client: ApiClient,
}

impl EndpointTools {
    /// Serve `registry` through `client`.
    pub fn new(registry: impl Into<Arc<EndpointRegistry>>, client: ApiClient) -> Self {
        Self {
            registry: registry.into(),
            client,
        }
    }

    /// The endpoints being served.
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }
}

/// Convert a projected description into an rmcp [`Tool`].
pub fn to_tool(description: ToolDescription) -> Tool {
    Tool::new(
        description.name,
        description.description,
        Arc::new(description.input_schema),
    )
}

impl ToolRegistry for EndpointTools {
    fn tools(&self) -> Vec<Tool> {
        self.registry
            .descriptors()
            .iter()
            .map(|d| to_tool(project(d)))
            .collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let endpoint = self.registry.find(name)?.clone();
        let client = self.client.clone();
        let args: Arguments = match args {
            Value::Object(map) => map,
            _ => Arguments::new(),
        };

        Some(Box::pin(async move {
            debug!(tool = %endpoint.name, "Dispatching tool call");
            let payload = client.call(&endpoint, &args).await.map_err(|e| {
                warn!(tool = %endpoint.name, error = %e, "API call failed");
                e.to_mcp_error()
            })?;
            success(&payload)
        }))
    }
}

fn success(payload: &Value) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(payload)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apiary_client::ClientConfig;
    use rmcp::model::{ErrorCode, RawContent};
    use serde_json::json;

    fn tools() -> EndpointTools {
        EndpointTools::new(
            EndpointRegistry::builtin(),
            ApiClient::new(ClientConfig::default()).unwrap(),
        )
    }

    #[test]
    fn test_one_tool_per_endpoint() {
        let tools = tools();
        let names: Vec<String> = tools.tools().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "jsonplaceholder_user",
                "jsonplaceholder_post",
                "httpbin_uuid",
                "httpbin_status",
                "httpbin_delay",
                "top_news_headlines",
            ]
        );
        assert_eq!(tools.tool_count(), tools.registry().len());
    }

    #[test]
    fn test_tool_schema_carried_over() {
        let tools = tools();
        let status = tools
            .tools()
            .into_iter()
            .find(|t| t.name == "httpbin_status")
            .unwrap();
        assert_eq!(
            status.description.as_deref(),
            Some("Get specific HTTP status from httpbin")
        );
        assert_eq!(status.input_schema["type"], "object");
        assert_eq!(status.input_schema["required"], json!(["code"]));
        assert_eq!(
            status.input_schema["properties"]["code"]["type"],
            "string"
        );
    }

    #[test]
    fn test_unknown_tool_not_dispatched() {
        assert!(tools().call("nonexistent", json!({})).is_none());
        assert!(!tools().has_tool("nonexistent"));
    }

    #[tokio::test]
    async fn test_missing_parameter_is_internal_error() {
        let err = tools()
            .call("httpbin_status", json!({}))
            .unwrap()
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(
            err.message,
            "API call failed: Missing required parameter: code"
        );
    }

    #[tokio::test]
    async fn test_non_object_arguments_treated_as_empty() {
        let err = tools()
            .call("jsonplaceholder_post", json!(["1"]))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("Missing required parameter: id"));
    }

    #[test]
    fn test_success_is_pretty_json_text() {
        let result = success(&json!({"status": 200})).unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "{\n  \"status\": 200\n}"),
            _ => unreachable!("expected text content"),
        }
    }
}
