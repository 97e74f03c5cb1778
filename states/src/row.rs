//! Row data model.
//!
//! A row is an open-ended mapping from field name to a JSON value. The table
//! never mutates rows; it only reads the value stored under a column key.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One record of table data, keyed by field name.
pub type Row = Map<String, Value>;

/// Converts a JSON array of objects into rows, preserving order.
pub fn rows_from_json(value: Value) -> Result<Vec<Row>> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(Error::not_an_array(&other)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => Ok(row),
            _ => Err(Error::RowNotObject { index }),
        })
        .collect()
}

/// Parses a JSON document into rows.
pub fn rows_from_str(json: &str) -> Result<Vec<Row>> {
    let value: Value = serde_json::from_str(json)?;
    rows_from_json(value)
}

/// Formats a cell value for display.
///
/// Strings are shown without quotes and `null` renders as empty text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Looks up `key` in `row` and formats it; a missing field renders empty.
pub fn lookup(row: &Row, key: &str) -> String {
    row.get(key).map(display_value).unwrap_or_default()
}
