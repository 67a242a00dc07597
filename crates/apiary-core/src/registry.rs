//! The endpoint catalog.
//!
//! [`EndpointRegistry`] is an immutable, ordered list of descriptors with
//! exact-name lookup. [`EndpointRegistry::builtin`] returns the catalog the
//! server ships with.

use crate::endpoint::{EndpointDescriptor, EndpointKind, ParameterSpec};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Name of the enriched NewsAPI headlines endpoint.
pub const TOP_HEADLINES: &str = "top_news_headlines";

const JSONPLACEHOLDER: &str = "https://jsonplaceholder.typicode.com";
const HTTPBIN: &str = "https://httpbin.org";
const NEWSAPI: &str = "https://newsapi.org";

/// An ordered, immutable catalog of endpoint descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointRegistry {
    endpoints: Vec<EndpointDescriptor>,
}

impl EndpointRegistry {
    /// Build a registry from descriptors, rejecting duplicate names.
    pub fn new(endpoints: Vec<EndpointDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for endpoint in &endpoints {
            if !seen.insert(endpoint.name.as_str()) {
                return Err(Error::DuplicateEndpoint {
                    name: endpoint.name.clone(),
                });
            }
        }
        Ok(Self { endpoints })
    }

    /// The built-in catalog of public endpoints.
    pub fn builtin() -> Self {
        Self {
            endpoints: vec![
                EndpointDescriptor::new(
                    "jsonplaceholder_user",
                    "Get user information from JSONPlaceholder",
                    JSONPLACEHOLDER,
                    "/users/{id}",
                )
                .with_parameter(ParameterSpec::required("id", "User ID")),
                EndpointDescriptor::new(
                    "jsonplaceholder_post",
                    "Get post information from JSONPlaceholder",
                    JSONPLACEHOLDER,
                    "/posts/{id}",
                )
                .with_parameter(ParameterSpec::required("id", "Post ID")),
                EndpointDescriptor::new("httpbin_uuid", "Get UUID from httpbin", HTTPBIN, "/uuid"),
                EndpointDescriptor::new(
                    "httpbin_status",
                    "Get specific HTTP status from httpbin",
                    HTTPBIN,
                    "/status/{code}",
                )
                .with_parameter(ParameterSpec::required(
                    "code",
                    "HTTP status code (e.g., 200, 404, 500)",
                )),
                EndpointDescriptor::new(
                    "httpbin_delay",
                    "Get response after delay from httpbin",
                    HTTPBIN,
                    "/delay/{seconds}",
                )
                .with_parameter(ParameterSpec::required(
                    "seconds",
                    "Number of seconds to delay (1-10)",
                )),
                EndpointDescriptor::new(
                    TOP_HEADLINES,
                    "Get top 10 news headlines from NewsAPI.org",
                    NEWSAPI,
                    "/v2/top-headlines",
                )
                .with_parameter(ParameterSpec::required(
                    "country",
                    "Country code (e.g., us, gb, in)",
                ))
                .with_kind(EndpointKind::TopHeadlines),
            ],
        }
    }

    /// All descriptors, in registry order.
    pub fn descriptors(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    /// Find a descriptor by exact name.
    pub fn find(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    /// Endpoint names, in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(|e| e.name.as_str())
    }

    /// Number of endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns `true` if the registry holds no endpoints.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Tests
// ============================================================================
