//! HTTP client and call pipeline for the Alpha Vantage API.
//!
//! This module provides the main entry point [`AlphaVantageClient`]: one
//! shared transport session, the process-wide API key and output-format
//! configuration, and the generic endpoint invocation pipeline consumed by
//! the services in [`crate::api`].

mod config;
mod http;
mod response;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::{AlphaVantageClient, API_KEY_ENV_VAR};
pub use response::{CallMeta, Payload};

pub(crate) use http::ClientInner;
