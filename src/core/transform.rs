//! JSON listing to spreadsheet row transformation
//!
//! Reads the five configured fields from each raw search item. The upstream
//! schema is an assumption, so extraction never fails: a missing or `null`
//! field becomes an absent cell, and a value of the wrong shape becomes an
//! absent cell plus a warning. The phone column falls back to
//! [`PHONE_FALLBACK`] instead of ever being empty.

use crate::config::FieldMapping;
use crate::domain::{ResultRow, ResultSet, PHONE_FALLBACK};
use serde_json::Value;

/// Convert raw search items into rows, preserving order
pub fn extract_rows(items: &[Value], fields: &FieldMapping) -> ResultSet {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| extract_row(index, item, fields))
        .collect()
}

/// Convert a single raw item; `index` is only used for diagnostics
pub fn extract_row(index: usize, item: &Value, fields: &FieldMapping) -> ResultRow {
    let Some(object) = item.as_object() else {
        tracing::warn!(index, kind = json_kind(item), "Search result item is not an object");
        return ResultRow::default();
    };

    let field = |key: &str| object.get(key).filter(|v| !v.is_null());

    let phone = field(&fields.phone)
        .and_then(|v| text_value(index, &fields.phone, v))
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| PHONE_FALLBACK.to_string());

    ResultRow {
        name: field(&fields.name).and_then(|v| text_value(index, &fields.name, v)),
        address: field(&fields.address).and_then(|v| text_value(index, &fields.address, v)),
        phone,
        latitude: field(&fields.latitude).and_then(|v| degrees_value(index, &fields.latitude, v)),
        longitude: field(&fields.longitude)
            .and_then(|v| degrees_value(index, &fields.longitude, v)),
    }
}

fn text_value(index: usize, key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            tracing::warn!(index, field = key, kind = json_kind(other), "Ignoring non-text value");
            None
        }
    }
}

fn degrees_value(index: usize, key: &str, value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite());

    if parsed.is_none() {
        tracing::warn!(index, field = key, value = %value, "Ignoring non-numeric coordinate");
    }
    parsed
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
