//! JSON data decoding
//!
//! Accepts either an array of objects (records) or an array of arrays
//! (first inner array is the header row), optionally wrapped in an object
//! under one of the usual keys.

use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, RawTable};
use serde_json::{Map, Value};

/// Keys checked, in order, when the top-level value is an object
const WRAPPER_KEYS: [&str; 5] = ["data", "rows", "items", "records", "results"];

/// Decode JSON content into a table
pub fn parse_json_content(json: &str) -> DataResult<RawTable> {
    let value: Value = serde_json::from_str(json)?;
    let array = extract_array(&value)?;

    let Some(first) = array.first() else {
        return Err(DataError::EmptyFile);
    };

    let rows = match first {
        Value::Object(obj) => records_to_rows(obj, array)?,
        Value::Array(_) => arrays_to_rows(array)?,
        _ => {
            return Err(DataError::InvalidData(
                "Array elements must be objects or arrays".to_string(),
            ));
        }
    };

    tracing::debug!(rows = rows.len().saturating_sub(1), "Decoded JSON table");
    Ok(RawTable::new(rows))
}

/// Extract the array from JSON value, handling common wrapper patterns
fn extract_array(value: &Value) -> DataResult<&Vec<Value>> {
    match value {
        Value::Array(arr) => Ok(arr),
        Value::Object(obj) => WRAPPER_KEYS
            .iter()
            .find_map(|key| match obj.get(*key) {
                Some(Value::Array(arr)) => Some(arr),
                _ => None,
            })
            .ok_or_else(|| {
                DataError::InvalidData(
                    "JSON must be an array or have a data/rows/items/records/results array"
                        .to_string(),
                )
            }),
        _ => Err(DataError::InvalidData(
            "JSON must be an array of objects or arrays".to_string(),
        )),
    }
}

/// Headers come from the first object's keys, in document order. Other
/// objects contribute values by key; keys they lack read as empty.
fn records_to_rows(first: &Map<String, Value>, array: &[Value]) -> DataResult<Vec<Vec<CellValue>>> {
    let headers: Vec<String> = first.keys().cloned().collect();
    if headers.is_empty() {
        return Err(DataError::NoColumns);
    }

    let mut rows = Vec::with_capacity(array.len() + 1);
    rows.push(headers.iter().map(|h| CellValue::Text(h.clone())).collect());

    for item in array {
        let Some(obj) = item.as_object() else {
            tracing::warn!("Skipping non-object element in JSON records");
            continue;
        };
        rows.push(
            headers
                .iter()
                .map(|h| obj.get(h).map(json_value_to_cell).unwrap_or(CellValue::Empty))
                .collect(),
        );
    }
    Ok(rows)
}

fn arrays_to_rows(array: &[Value]) -> DataResult<Vec<Vec<CellValue>>> {
    let rows: Vec<Vec<CellValue>> = array
        .iter()
        .map(|item| match item {
            Value::Array(cells) => cells.iter().map(json_value_to_cell).collect(),
            other => vec![json_value_to_cell(other)],
        })
        .collect();

    if rows.first().map(Vec::is_empty).unwrap_or(true) {
        return Err(DataError::NoColumns);
    }
    Ok(rows)
}

/// Numbers stay numbers, null is empty, anything else becomes its text
fn json_value_to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Number(n) => n
            .as_f64()
            .map(CellValue::Number)
            .unwrap_or_else(|| CellValue::Text(n.to_string())),
        Value::String(s) if s.is_empty() => CellValue::Empty,
        Value::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}
