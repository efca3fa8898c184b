//! Conversion of structured payloads into polars DataFrames.
//!
//! The API reports every numeric field as a string, so columns stay string
//! typed; callers cast what they need.

use polars::prelude::{Column, DataFrame};
use serde_json::Value;

use crate::{Error, Result};

/// Convert a structured payload into a [`DataFrame`].
///
/// An array of objects becomes one row per object, with columns in
/// first-appearance order and nulls for missing cells. A lone object
/// becomes a one-row frame.
pub(crate) fn to_frame(payload: &Value) -> Result<DataFrame> {
    match payload {
        Value::Array(rows) => rows_to_frame(rows),
        Value::Object(_) => rows_to_frame(std::slice::from_ref(payload)),
        other => Err(Error::InvalidInput(format!(
            "cannot convert a JSON {} into a table",
            type_name(other)
        ))),
    }
}

fn rows_to_frame(rows: &[Value]) -> Result<DataFrame> {
    let mut names: Vec<&str> = Vec::new();
    for row in rows {
        let object = row.as_object().ok_or_else(|| {
            Error::InvalidInput(format!(
                "table rows must be JSON objects, found a {}",
                type_name(row)
            ))
        })?;
        for name in object.keys() {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| row.get(name).and_then(cell))
                .collect();
            Column::new(name.into(), values)
        })
        .collect();

    DataFrame::new(columns).map_err(Error::from)
}

fn cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_of_objects() {
        let payload = json!([
            {"fiscalDateEnding": "2023-12-31", "totalRevenue": "61860000000"},
            {"fiscalDateEnding": "2022-12-31", "totalRevenue": "60530000000"},
        ]);
        let frame = to_frame(&payload).unwrap();
        assert_eq!(frame.shape(), (2, 2));
        assert!(frame.column("fiscalDateEnding").is_ok());
        assert!(frame.column("totalRevenue").is_ok());
    }

    #[test]
    fn test_single_object_becomes_one_row() {
        let payload = json!({"Symbol": "IBM", "Sector": "TECHNOLOGY"});
        let frame = to_frame(&payload).unwrap();
        assert_eq!(frame.shape(), (1, 2));
    }

    #[test]
    fn test_missing_cells_are_null() {
        let payload = json!([
            {"symbol": "IBM", "delistingDate": null},
            {"symbol": "AA"},
        ]);
        let frame = to_frame(&payload).unwrap();
        let column = frame.column("delistingDate").unwrap();
        assert_eq!(column.null_count(), 2);
    }

    #[test]
    fn test_scalar_payload_is_rejected() {
        assert!(matches!(
            to_frame(&json!("not tabular")),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            to_frame(&json!(["not", "objects"])),
            Err(Error::InvalidInput(_))
        ));
    }
}
