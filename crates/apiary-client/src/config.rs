//! Client configuration.

use std::fmt;
use std::time::Duration;

/// Upper bound on a single upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "MCP-API-Server/1.0";

/// Settings for [`ApiClient`](crate::ApiClient).
///
/// The NewsAPI key is only ever used as a query parameter on the headlines
/// endpoint and is redacted from `Debug` output.
#[derive(Clone)]
pub struct ClientConfig {
    timeout: Duration,
    user_agent: String,
    news_api_key: Option<String>,
}

impl ClientConfig {
    /// Configuration with the default timeout and user agent, and no key.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            news_api_key: None,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the NewsAPI key used by the headlines endpoint.
    pub fn with_news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// NewsAPI key, if configured.
    pub fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent(), "MCP-API-Server/1.0");
        assert!(config.news_api_key().is_none());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_millis(250))
            .with_user_agent("test-agent")
            .with_news_api_key("secret");
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.user_agent(), "test-agent");
        assert_eq!(config.news_api_key(), Some("secret"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ClientConfig::new().with_news_api_key("secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
