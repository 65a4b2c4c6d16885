//! JSON ingestion for event feeds.
//!
//! Only a JSON array of `{id, start, end}` objects is accepted. Object maps,
//! scalars, and malformed elements are rejected with
//! [`LayoutError::InvalidInput`] rather than replaced with an empty list.
//! Interval validity is left to [`crate::layout::layout`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{LayoutError, Result};
use crate::event::Event;

/// Parse events from an already-decoded JSON value.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidInput`] if `value` is not an array, or if
/// any element is not an object with an integer or string `id` and
/// non-negative integer `start` and `end` minutes.
///
/// # Examples
///
/// ```
/// use day_layout::input::events_from_json;
/// use serde_json::json;
///
/// let events = events_from_json(&json!([{ "id": 1, "start": 30, "end": 150 }])).unwrap();
/// assert_eq!(events[0].start, 30);
///
/// assert!(events_from_json(&json!({ "1": { "start": 30, "end": 150 } })).is_err());
/// ```
pub fn events_from_json(value: &Value) -> Result<Vec<Event>> {
    let items = value.as_array().ok_or_else(|| {
        LayoutError::InvalidInput(format!(
            "expected a JSON array of events, got {}",
            kind_of(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Event::deserialize(item).map_err(|e| {
                LayoutError::InvalidInput(format!("event at index {index}: {e}"))
            })
        })
        .collect()
}

/// Parse events from JSON text.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidInput`] if `text` is not valid JSON or does
/// not hold an array of events.
pub fn events_from_str(text: &str) -> Result<Vec<Event>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LayoutError::InvalidInput(format!("malformed JSON: {e}")))?;
    events_from_json(&value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
