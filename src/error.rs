//! Error types for the Alpha Vantage API client.
//!
//! Every fallible operation in this crate returns one of the conditions
//! below unchanged: the client performs no retries, no suppression, and no
//! local recovery.

use thiserror::Error;

/// A specialized `Result` type for Alpha Vantage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Alpha Vantage API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Construction-time configuration failure, such as a missing API key
    /// or an output format a service's capabilities exclude.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network, timeout, or HTTP-layer failure, including non-success
    /// status codes and undecodable response bodies.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API understood the request but rejected it (bad symbol, bad
    /// key, quota). The message is passed through verbatim.
    #[error("API error: {message}")]
    Api {
        /// The error text reported by the API.
        message: String,
    },

    /// The API returned a well-formed "nothing found" response.
    #[error("API returned no data for the request")]
    EmptyResult,

    /// JSON deserialization into a typed model failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL could not be parsed.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Conversion of a structured payload into a DataFrame failed.
    #[error("table conversion error: {0}")]
    Table(#[from] polars::prelude::PolarsError),

    /// Invalid input provided to a function.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller. This crate never retries
    /// on its own.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns `true` if this is the API's "no data" condition, which
    /// callers often treat differently from a hard failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Error::EmptyResult)
    }

    /// Returns `true` if the error was raised before any network call was
    /// attempted.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
