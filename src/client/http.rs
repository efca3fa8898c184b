//! HTTP client implementation for the Alpha Vantage API.

use std::env;
use std::sync::Arc;

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::api::{FundamentalsService, ListingsService};
use crate::endpoint::{classify, unwrap_payload, EndpointSpec};
use crate::models::OutputFormat;
use crate::table;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::response::{CallMeta, Payload};

/// Environment variable holding the API key for [`AlphaVantageClient::from_env`].
pub const API_KEY_ENV_VAR: &str = "ALPHAVANTAGE_API_KEY";

/// The main client for the Alpha Vantage API.
///
/// The client owns the transport session, the API key, and the output-format
/// configuration, and exposes the API through service handles. Cloning is
/// cheap; clones share one connection pool, and independent concurrent calls
/// on shared clones are safe.
///
/// # Example
///
/// ```no_run
/// use alphavantage_rs::AlphaVantageClient;
///
/// # async fn example() -> alphavantage_rs::Result<()> {
/// let client = AlphaVantageClient::new("demo")?;
/// let (payload, _meta) = client.fundamentals()?.company_overview("IBM").await?;
/// println!("{:?}", payload.as_json());
/// # Ok(())
/// # }
/// ```
pub struct AlphaVantageClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) api_key: SecretString,
    pub(crate) config: ClientConfig,
}

impl AlphaVantageClient {
    /// Create a new client with the given API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client from the `ALPHAVANTAGE_API_KEY` environment
    /// variable, loading a `.env` file if one is present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let api_key = env::var(API_KEY_ENV_VAR)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV_VAR} environment variable not set")))?;
        Self::new(api_key)
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_key: SecretString::from(api_key.into()),
                config,
            }),
        })
    }

    /// Get the fundamental data service.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the configured output format is outside
    /// [`FundamentalsService::CAPABILITIES`]. The check runs here, before
    /// any network call.
    pub fn fundamentals(&self) -> Result<FundamentalsService> {
        FundamentalsService::new(self.inner.clone())
    }

    /// Get the listing & delisting status service.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the configured output format is outside
    /// [`ListingsService::CAPABILITIES`].
    pub fn listings(&self) -> Result<ListingsService> {
        ListingsService::new(self.inner.clone())
    }

    /// The configured output format.
    pub fn output_format(&self) -> OutputFormat {
        self.inner.config.output
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Run one endpoint invocation through the call pipeline: assemble the
    /// query, perform exactly one HTTP GET, classify the response, unwrap,
    /// and convert into the configured output representation.
    pub(crate) async fn invoke(
        &self,
        spec: &EndpointSpec,
        values: &[Option<&str>],
    ) -> Result<(Payload, CallMeta)> {
        let datatype = self.config.output.datatype();
        let query = spec.query(self.api_key.expose_secret(), datatype, values);

        tracing::debug!(function = spec.function, datatype, "dispatching request");
        let response = self
            .http
            .get(self.base_url.clone())
            .query(&query)
            .send()
            .await?;

        let meta = CallMeta {
            status: response.status(),
            headers: response.headers().clone(),
        };
        let response = response.error_for_status()?;

        let payload = match self.config.output {
            OutputFormat::Csv => Payload::Csv(response.text().await?),
            OutputFormat::Json | OutputFormat::Table => {
                let value: Value = response.json().await?;
                classify(&value)?;
                let value = unwrap_payload(value, spec.unwrap_key);
                match self.config.output {
                    OutputFormat::Table => Payload::Table(table::to_frame(&value)?),
                    _ => Payload::Json(value),
                }
            }
        };

        tracing::debug!(function = spec.function, status = %meta.status, "request completed");
        Ok((payload, meta))
    }
}

impl Clone for AlphaVantageClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
