//! Projection of endpoint descriptors into tool descriptions.
//!
//! The projection is total and pure: identical descriptors always produce
//! identical (and identically serialized) descriptions.

use crate::endpoint::EndpointDescriptor;
use crate::registry::EndpointRegistry;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// A JSON-schema-shaped description of one tool.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescription {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// Object schema with `properties` and `required`.
    pub input_schema: Map<String, Value>,
}

/// Describe a single endpoint as a tool.
pub fn project(descriptor: &EndpointDescriptor) -> ToolDescription {
    let properties: Map<String, Value> = descriptor
        .parameters
        .iter()
        .map(|p| {
            (
                p.name.clone(),
                json!({
                    "type": p.param_type.as_str(),
                    "description": p.description,
                }),
            )
        })
        .collect();

    let required: Vec<Value> = descriptor
        .required_parameters()
        .map(|p| Value::String(p.name.clone()))
        .collect();

    let mut input_schema = Map::new();
    input_schema.insert("type".to_string(), Value::String("object".to_string()));
    input_schema.insert("properties".to_string(), Value::Object(properties));
    input_schema.insert("required".to_string(), Value::Array(required));

    ToolDescription {
        name: descriptor.name.clone(),
        description: descriptor.description.clone(),
        input_schema,
    }
}

/// Describe every endpoint of a registry, in registry order.
pub fn project_all(registry: &EndpointRegistry) -> Vec<ToolDescription> {
    registry.descriptors().iter().map(project).collect()
}

// ============================================================================
// Tests
// ============================================================================
