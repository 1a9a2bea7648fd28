//! JSON <-> engine Value conversion utilities

use super::CliError;
use crate::{DataContext, Value};

/// Convert a scalar serde_json::Value to an engine Value
pub fn json_to_value(v: &serde_json::Value) -> Result<Value, CliError> {
    match v {
        serde_json::Value::Null => Ok(Value::Missing),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number).ok_or_else(|| {
            CliError::UnsupportedData(format!("number {} does not fit in an f64", n))
        }),
        serde_json::Value::String(s) => Ok(Value::Str(s.clone())),
        serde_json::Value::Array(_) => Err(CliError::UnsupportedData(
            "arrays are not valid data context values".to_string(),
        )),
        serde_json::Value::Object(_) => Err(CliError::UnsupportedData(
            "nested objects are not valid data context values".to_string(),
        )),
    }
}

/// Convert a JSON object into a flat data context
pub fn json_to_context(v: &serde_json::Value) -> Result<DataContext, CliError> {
    match v {
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), json_to_value(v)?)))
            .collect(),
        _ => Err(CliError::UnsupportedData(
            "data context must be a JSON object".to_string(),
        )),
    }
}

/// Convert an engine Value to serde_json::Value
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Missing => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(b),
        Value::Number(n) => serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(s) => serde_json::Value::String(s),
    }
}
