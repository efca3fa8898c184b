//! Endpoint descriptors and the stages of the generic call pipeline.
//!
//! Every public API method is declared as a [`EndpointSpec`] constant: the
//! remote function identifier, an optional key selecting the wanted slice of
//! the response, and the names of the endpoint's optional query parameters.
//! The client composes the stages in this module into one call path, so the
//! per-endpoint methods stay pure configuration.

use serde_json::Value;

use crate::models::OutputFormat;
use crate::{Error, Result};

/// Response fields the API uses to report a rejection with HTTP 200.
///
/// `Error Message` carries hard rejections (bad symbol, bad key);
/// `Information` and `Note` carry quota and premium-endpoint notices.
const ERROR_FIELDS: [&str; 3] = ["Error Message", "Information", "Note"];

/// Declarative description of one remote API function.
///
/// Instances are `const` and never mutated; one exists per public endpoint
/// method. See the tables in [`crate::api`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// The remote API's `function` identifier, e.g. `"INCOME_STATEMENT"`.
    pub function: &'static str,
    /// Field of the structured response holding the wanted payload. Sibling
    /// fields (e.g. the other time granularity) are discarded when present.
    pub unwrap_key: Option<&'static str>,
    /// Names of the endpoint's extra query parameters, in wire order.
    pub params: &'static [&'static str],
}

impl EndpointSpec {
    /// Assemble the outbound query for this endpoint.
    ///
    /// The pairs are ordered: `function`, each supplied extra parameter,
    /// `apikey`, `datatype`. A `None` value omits its parameter entirely;
    /// no empty parameter is ever sent.
    pub(crate) fn query(
        &self,
        api_key: &str,
        datatype: &str,
        values: &[Option<&str>],
    ) -> Vec<(&'static str, String)> {
        debug_assert_eq!(values.len(), self.params.len());

        let mut pairs = Vec::with_capacity(3 + self.params.len());
        pairs.push(("function", self.function.to_string()));
        for (name, value) in self.params.iter().zip(values) {
            if let Some(value) = value {
                pairs.push((*name, value.to_string()));
            }
        }
        pairs.push(("apikey", api_key.to_string()));
        pairs.push(("datatype", datatype.to_string()));
        pairs
    }
}

/// Classify a structured payload as success, rejection, or "no data".
///
/// Rejections surface the API's message verbatim as [`Error::Api`]; an empty
/// object or array becomes [`Error::EmptyResult`]. Raw-text responses never
/// reach this stage.
pub(crate) fn classify(payload: &Value) -> Result<()> {
    if let Some(object) = payload.as_object() {
        for field in ERROR_FIELDS {
            if let Some(message) = object.get(field).and_then(Value::as_str) {
                return Err(Error::Api {
                    message: message.to_string(),
                });
            }
        }
        if object.is_empty() {
            return Err(Error::EmptyResult);
        }
    } else if payload.as_array().is_some_and(|rows| rows.is_empty()) {
        return Err(Error::EmptyResult);
    }
    Ok(())
}

/// Select the nested value at `unwrap_key`, when set and present.
///
/// Otherwise the payload passes through unchanged.
pub(crate) fn unwrap_payload(mut payload: Value, unwrap_key: Option<&str>) -> Value {
    if let Some(key) = unwrap_key {
        if let Some(inner) = payload.get_mut(key) {
            return inner.take();
        }
    }
    payload
}

/// The output formats a client variant is able to honor.
///
/// Each service declares its capabilities as an associated constant, and the
/// client checks them once when the service handle is constructed — before
/// any network call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The supported output formats.
    pub formats: &'static [OutputFormat],
}

impl Capabilities {
    /// Returns `true` if `format` is within this capability set.
    pub fn supports(&self, format: OutputFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Validate the client's configured format against this capability set.
    pub(crate) fn validate(&self, format: OutputFormat, service: &'static str) -> Result<()> {
        if self.supports(format) {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "output format {format} is not supported by the {service} service"
            )))
        }
    }
}
