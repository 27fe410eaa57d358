//! Configuration for the stock-service API client.

use std::time::Duration;

/// Configuration for the stock-service API client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the service (default: http://localhost:8080/api/v1).
    pub base_url: String,
    /// Request timeout for REST calls. Streaming requests are exempt.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: crate::BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("stockservice-api-rust/{}", crate::VERSION),
        }
    }
}

impl Config {
    /// Create a configuration pointing at the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
