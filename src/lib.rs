//! # alphavantage-rs
//!
//! A Rust client for the Alpha Vantage fundamental data API.
//!
//! Every public method corresponds one-to-one with a remote `function`
//! endpoint. The methods themselves are declarative: each one names an
//! [`endpoint::EndpointSpec`] — the function identifier, an optional key
//! selecting the wanted slice of the response, and the endpoint's optional
//! query parameters — and hands it to one shared call pipeline that builds
//! the request, performs a single HTTP GET, classifies the response, and
//! converts the result into the client's configured output representation.
//!
//! ## Features
//!
//! - **Declarative endpoints**: per-endpoint methods are configuration data
//!   over one generic invoker, not hand-rolled request code
//! - **Three output formats**: structured JSON pass-through, polars
//!   DataFrame conversion, or raw CSV text, chosen at construction
//! - **Capability checking**: services that cannot honor a format reject it
//!   when the service handle is created, before any network call
//! - **Explicit error taxonomy**: transport failures, API rejections, and
//!   "no data" responses are distinct conditions, propagated unchanged
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alphavantage_rs::AlphaVantageClient;
//! use alphavantage_rs::models::CompanyOverview;
//!
//! #[tokio::main]
//! async fn main() -> alphavantage_rs::Result<()> {
//!     // Reads ALPHAVANTAGE_API_KEY from the environment or a .env file
//!     let client = AlphaVantageClient::from_env()?;
//!
//!     let fundamentals = client.fundamentals()?;
//!     let (payload, meta) = fundamentals.company_overview("IBM").await?;
//!     println!("status: {}", meta.status);
//!
//!     let overview: CompanyOverview = payload.parse()?;
//!     println!("{} ({:?})", overview.name, overview.sector);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Tabular Output
//!
//! ```rust,no_run
//! use alphavantage_rs::{AlphaVantageClient, ClientConfig, OutputFormat};
//!
//! #[tokio::main]
//! async fn main() -> alphavantage_rs::Result<()> {
//!     let config = ClientConfig::default().with_output_format(OutputFormat::Table);
//!     let client = AlphaVantageClient::with_config("demo", config)?;
//!
//!     let (payload, _meta) = client.fundamentals()?.income_statement_annual("IBM").await?;
//!     if let Some(frame) = payload.as_table() {
//!         println!("{frame}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! This crate performs no retries, no rate limiting, and no caching: every
//! invocation is exactly one outbound request, and all failures propagate
//! unchanged to the caller.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;

mod table;

// Re-export primary types at crate root for convenience
pub use client::{AlphaVantageClient, CallMeta, ClientConfig, Payload, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{ListingState, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```rust
/// use alphavantage_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{FundamentalsService, ListingsService};
    pub use crate::client::{AlphaVantageClient, CallMeta, ClientConfig, Payload};
    pub use crate::endpoint::{Capabilities, EndpointSpec};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        CompanyOverview, EarningsReport, FinancialReport, ListingEntry, ListingState, OutputFormat,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_format() {
        let client = AlphaVantageClient::new("demo").unwrap();
        assert_eq!(client.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_csv_config_rejected_by_fundamentals() {
        let config = ClientConfig::default().with_output_format(OutputFormat::Csv);
        let client = AlphaVantageClient::with_config("demo", config).unwrap();
        assert!(matches!(client.fundamentals(), Err(Error::Config(_))));
        // The same client can still serve the listing feed.
        assert!(client.listings().is_ok());
    }
}
