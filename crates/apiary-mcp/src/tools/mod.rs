//! Tool registries served by `apiary-mcp`.

pub mod endpoints;

pub use endpoints::{EndpointTools, to_tool};
