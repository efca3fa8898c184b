//! Primitive enums shared across the client.

use std::fmt;

/// The representation every call's result is converted into.
///
/// Selected once at client construction, not per call. Raw-text and tabular
/// output are honored only by services whose [`Capabilities`] include them.
///
/// [`Capabilities`]: crate::endpoint::Capabilities
///
/// # Example
///
/// ```
/// use alphavantage_rs::{ClientConfig, OutputFormat};
///
/// let config = ClientConfig::default().with_output_format(OutputFormat::Table);
/// assert_eq!(config.output, OutputFormat::Table);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Structured pass-through of the JSON payload.
    #[default]
    Json,
    /// Conversion of the structured payload into a polars DataFrame.
    Table,
    /// Raw CSV text pass-through.
    Csv,
}

impl OutputFormat {
    /// The `datatype` directive sent on the wire for this format.
    ///
    /// Tabular output is built client-side from the structured payload.
    pub(crate) fn datatype(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Table => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Listing-state filter for the listing & delisting status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingState {
    /// Actively traded stocks and ETFs.
    #[default]
    Active,
    /// Assets delisted as of the query date.
    Delisted,
}

impl ListingState {
    /// The `state` parameter value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingState::Active => "active",
            ListingState::Delisted => "delisted",
        }
    }
}

impl fmt::Display for ListingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
