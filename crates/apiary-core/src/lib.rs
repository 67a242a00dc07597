//! Apiary Core: endpoint descriptors, registry, schema projection and
//! request resolution.
//!
//! This crate holds the declarative half of Apiary. It performs no I/O and
//! has no internal Apiary dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`endpoint`]: Endpoint and parameter descriptors
//! - [`registry`]: The ordered endpoint catalog and name lookup
//! - [`schema`]: Projection of descriptors into JSON-schema tool descriptions
//! - [`arguments`]: Argument presence rules
//! - [`resolver`]: Path placeholder substitution and required-parameter checks
//! - [`error`]: Error types and Result alias

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod arguments;
pub mod endpoint;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod schema;

mod proptests;

// Re-export key types at crate root for convenience
pub use arguments::{Arguments, argument_text};
pub use endpoint::{EndpointDescriptor, EndpointKind, ParamType, ParameterSpec};
pub use error::{Error, Result};
pub use registry::{EndpointRegistry, TOP_HEADLINES};
pub use resolver::{encode_component, resolve};
pub use schema::{ToolDescription, project, project_all};
