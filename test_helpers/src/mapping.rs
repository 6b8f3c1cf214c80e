//! Builders for JSON mapping fixtures.

use anyhow::{Result, anyhow};
use serde_json::{Map, Value, json};

/// Unwraps a JSON literal into its object map.
///
/// # Errors
///
/// Returns an error naming the value when it is not an object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use test_helpers::mapping::object;
///
/// let map = object(json!({"a": 1}))?;
/// assert_eq!(map.len(), 1);
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("fixture must be a JSON object, got {other}")),
    }
}

/// Unwraps several JSON literals, preserving their order.
///
/// # Errors
///
/// Returns an error for the first value that is not an object.
pub fn objects<I>(values: I) -> Result<Vec<Map<String, Value>>>
where
    I: IntoIterator<Item = Value>,
{
    values.into_iter().map(object).collect()
}

/// The three-input precedence fixture shared by the merge suites.
///
/// # Errors
///
/// Never fails in practice; the literals are all objects.
pub fn three_way_layers() -> Result<Vec<Map<String, Value>>> {
    objects([
        json!({"a": 0, "b": {"w": 52, "p": 100}, "c": 97}),
        json!({"b": {"p": 200}, "d": 100}),
        json!({"a": "yum"}),
    ])
}
