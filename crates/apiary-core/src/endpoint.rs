//! Endpoint and parameter descriptors.
//!
//! An [`EndpointDescriptor`] is the static definition of one callable tool:
//! where it lives (`base_url` + `path_template`), which arguments it takes,
//! and which [`EndpointKind`] pipeline serves it. Descriptors are built once
//! at startup and never mutated afterwards.

use std::fmt;

// ============================================================================
// ParamType
// ============================================================================

/// Semantic scalar type of a parameter.
///
/// Serialized into tool schemas as the JSON-schema type name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamType {
    /// Free-form text.
    #[default]
    String,
    /// Any JSON number.
    Number,
    /// Whole numbers only.
    Integer,
    /// `true` or `false`.
    Boolean,
}

impl ParamType {
    /// The JSON-schema type name for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ParameterSpec
// ============================================================================

/// A single declared parameter of an endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter name; matches a `{name}` placeholder in the path template.
    pub name: String,
    /// Semantic type tag.
    pub param_type: ParamType,
    /// Human-readable description shown in the tool schema.
    pub description: String,
    /// Whether a call without this argument is rejected.
    pub required: bool,
}

impl ParameterSpec {
    /// A required string parameter.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::String,
            description: description.into(),
            required: true,
        }
    }

    /// An optional string parameter.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    /// Override the type tag.
    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = param_type;
        self
    }

    /// The `{name}` token this parameter fills in a path template.
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.name)
    }
}

// ============================================================================
// EndpointKind
// ============================================================================

/// The pipeline that serves an endpoint.
///
/// A closed set: adding a kind means adding a variant and its arm in the
/// client, without touching tool dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// Substitute arguments into the path template and pass the response
    /// through unchanged.
    #[default]
    PathTemplate,
    /// Query NewsAPI top headlines and render them as a table.
    TopHeadlines,
}

// ============================================================================
// EndpointDescriptor
// ============================================================================

/// Static definition of one callable endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Unique tool name.
    pub name: String,
    /// Description surfaced verbatim in the tool listing.
    pub description: String,
    /// Absolute origin, e.g. `https://httpbin.org`.
    pub base_url: String,
    /// Path with zero or more `{param}` placeholders.
    pub path_template: String,
    /// Declared parameters, in order.
    pub parameters: Vec<ParameterSpec>,
    /// Which pipeline serves this endpoint.
    pub kind: EndpointKind,
}

impl EndpointDescriptor {
    /// Create a path-template endpoint with no parameters.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        base_url: impl Into<String>,
        path_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            base_url: base_url.into(),
            path_template: path_template.into(),
            parameters: Vec::new(),
            kind: EndpointKind::PathTemplate,
        }
    }

    /// Append a parameter.
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the endpoint kind.
    pub fn with_kind(mut self, kind: EndpointKind) -> Self {
        self.kind = kind;
        self
    }

    /// Point the endpoint at a different origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up a declared parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Declared parameters flagged as required, in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// The unexpanded endpoint URL (`base_url` + `path_template`).
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, self.path_template)
    }
}

// ============================================================================
// Tests
// ============================================================================
