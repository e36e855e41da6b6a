//! JSON-aware field producer.
//!
//! Requires the `json` feature.

use std::borrow::Cow;

use serde::de::IgnoredAny;

use crate::types::{Field, Value};

/// Builds a field from raw bytes, keeping them as raw JSON when they parse.
///
/// Valid JSON becomes [`Value::Json`] so serializing sinks can embed it as-is;
/// anything else is kept as [`Value::Bytes`].
///
/// # Examples
///
/// ```
/// use error_trail::{json, Value};
///
/// let field = json::json("body", br#"{"id": 7}"#);
/// assert_eq!(field.value(), &Value::Json(r#"{"id": 7}"#.into()));
///
/// let field = json::json("body", b"not json");
/// assert_eq!(field.value(), &Value::Bytes(b"not json".to_vec()));
/// ```
pub fn json<K: Into<Cow<'static, str>>>(key: K, value: &[u8]) -> Field {
    let value = match serde_json::from_slice::<IgnoredAny>(value) {
        Ok(_) => match core::str::from_utf8(value) {
            Ok(text) => Value::Json(text.to_owned()),
            Err(_) => Value::Bytes(value.to_vec()),
        },
        Err(_) => Value::Bytes(value.to_vec()),
    };
    Field::new(key, value)
}
