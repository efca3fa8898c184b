//! Client configuration options.

use std::time::Duration;

use crate::models::OutputFormat;

/// Base URL queried by default.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Configuration for the Alpha Vantage client.
///
/// The output format governs how every call's result is converted; it is a
/// construction-time choice, not a per-call one. Timeouts are enforced by
/// the transport layer only — this crate adds no retry policy.
///
/// # Example
///
/// ```
/// use alphavantage_rs::{ClientConfig, OutputFormat};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_output_format(OutputFormat::Table)
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Output representation for every call's result.
    pub output: OutputFormat,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Base URL of the query endpoint.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("alphavantage-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_output_format(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the query endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
