//! Named diagnostic field.

use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Debug, Display};

use crate::types::Value;

/// A `(key, value)` pair attached to a [`StructuredError`](crate::StructuredError).
///
/// # Examples
///
/// ```
/// use error_trail::{Field, Value};
///
/// let field = Field::new("user_id", 42);
/// assert_eq!(field.key(), "user_id");
/// assert_eq!(field.value(), &Value::Int(42));
/// assert_eq!(field.to_string(), "user_id=42");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    pub(crate) key: Cow<'static, str>,
    pub(crate) value: Value,
}

impl Field {
    #[inline]
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Value>,
    {
        Self { key: key.into(), value: value.into() }
    }

    #[inline]
    pub fn string<K: Into<Cow<'static, str>>, V: Into<String>>(key: K, value: V) -> Self {
        Self { key: key.into(), value: Value::String(value.into()) }
    }

    #[inline]
    pub fn int<K: Into<Cow<'static, str>>>(key: K, value: i64) -> Self {
        Self { key: key.into(), value: Value::Int(value) }
    }

    #[inline]
    pub fn uint<K: Into<Cow<'static, str>>>(key: K, value: u64) -> Self {
        Self { key: key.into(), value: Value::Uint(value) }
    }

    #[inline]
    pub fn bool<K: Into<Cow<'static, str>>>(key: K, value: bool) -> Self {
        Self { key: key.into(), value: Value::Bool(value) }
    }

    #[inline]
    pub fn float<K: Into<Cow<'static, str>>>(key: K, value: f64) -> Self {
        Self { key: key.into(), value: Value::Float(value) }
    }

    #[inline]
    pub fn bytes<K: Into<Cow<'static, str>>, V: Into<Vec<u8>>>(key: K, value: V) -> Self {
        Self { key: key.into(), value: Value::Bytes(value.into()) }
    }

    /// Records the rendered message of a nested error.
    #[inline]
    pub fn error<K: Into<Cow<'static, str>>>(key: K, error: &(dyn Error + '_)) -> Self {
        Self { key: key.into(), value: Value::Error(error.to_string()) }
    }

    /// Records any value through its `Debug` output.
    #[inline]
    pub fn debug<K: Into<Cow<'static, str>>, T: Debug + ?Sized>(key: K, value: &T) -> Self {
        Self { key: key.into(), value: Value::Debug(format!("{value:?}")) }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn into_parts(self) -> (Cow<'static, str>, Value) {
        (self.key, self.value)
    }

    /// Whether this field's key matches `key` under normalization.
    #[inline]
    pub fn matches(&self, key: &str) -> bool {
        crate::key::keys_equal(&self.key, key)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Field
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
