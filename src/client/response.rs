//! Call results: the converted payload and per-call metadata.

use polars::prelude::DataFrame;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// A call's result in the client's configured output representation.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Structured JSON pass-through.
    Json(Value),
    /// Tabular conversion of the structured payload.
    Table(DataFrame),
    /// Raw CSV text pass-through.
    Csv(String),
}

impl Payload {
    /// The structured payload, if this is `Json`.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Consume into the structured payload, if this is `Json`.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The DataFrame, if this is `Table`.
    pub fn as_table(&self) -> Option<&DataFrame> {
        match self {
            Payload::Table(frame) => Some(frame),
            _ => None,
        }
    }

    /// The raw text, if this is `Csv`.
    pub fn as_csv(&self) -> Option<&str> {
        match self {
            Payload::Csv(text) => Some(text),
            _ => None,
        }
    }

    /// Deserialize a structured payload into a typed model.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when the payload is not `Json`;
    /// [`Error::Json`] when deserialization fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use alphavantage_rs::models::CompanyOverview;
    ///
    /// # async fn example(client: alphavantage_rs::AlphaVantageClient) -> alphavantage_rs::Result<()> {
    /// let (payload, _meta) = client.fundamentals()?.company_overview("IBM").await?;
    /// let overview: CompanyOverview = payload.parse()?;
    /// println!("{}: {:?}", overview.symbol, overview.sector);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            Payload::Json(value) => serde_json::from_value(value.clone()).map_err(Error::from),
            _ => Err(Error::InvalidInput(
                "typed parsing requires the json output format".to_string(),
            )),
        }
    }
}

/// Metadata about a completed call, for callers that need response headers.
#[derive(Debug, Clone)]
pub struct CallMeta {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let payload = Payload::Json(json!({"Symbol": "IBM"}));
        assert!(payload.as_json().is_some());
        assert!(payload.as_table().is_none());
        assert!(payload.as_csv().is_none());

        let payload = Payload::Csv("symbol,name\r\n".to_string());
        assert_eq!(payload.as_csv(), Some("symbol,name\r\n"));
    }

    #[test]
    fn test_parse_requires_structured_payload() {
        let payload = Payload::Csv("symbol,name\r\n".to_string());
        assert!(matches!(
            payload.parse::<serde_json::Value>(),
            Err(Error::InvalidInput(_))
        ));
    }
}
