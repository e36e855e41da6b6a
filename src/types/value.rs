//! Typed payload carried by a [`Field`](crate::types::Field).

use core::fmt::{self, Display};

/// Tagged value of a diagnostic field.
///
/// The merge engine never looks inside a value; it only replaces one value
/// with another when keys collide.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
    Float(f64),
    /// Rendered message of a nested error.
    Error(String),
    /// Raw bytes that are not known to be valid JSON.
    Bytes(Vec<u8>),
    /// Raw JSON text, already validated by the producer.
    Json(String),
    /// Arbitrary value rendered through its `Debug` implementation.
    Debug(String),
}

impl Value {
    /// Returns the value as a signed integer when it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Uint(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns the string payload of textual variants.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Error(s) | Self::Json(s) | Self::Debug(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used when rendering type tags.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Error(_) => "error",
            Self::Bytes(_) => "bytes",
            Self::Json(_) => "json",
            Self::Debug(_) => "debug",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Error(s) | Self::Json(s) | Self::Debug(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_value!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Uint as u64,
    u16 => Uint as u64,
    u32 => Uint as u64,
    u64 => Uint as u64,
    bool => Bool as bool,
    f32 => Float as f64,
    f64 => Float as f64,
    String => String as String,
    &str => String as String,
    Vec<u8> => Bytes as Vec<u8>,
);

impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<isize> for Value {
    #[inline]
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&[u8]> for Value {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::String(s) | Self::Error(s) | Self::Debug(s) => serializer.serialize_str(s),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Uint(n) => serializer.serialize_u64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Bytes(bytes) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
            #[cfg(feature = "json")]
            Self::Json(raw) => {
                // Embedded verbatim: numbers outside f64 or i64 keep their text.
                let raw: &serde_json::value::RawValue =
                    serde_json::from_str(raw).map_err(serde::ser::Error::custom)?;
                serde::Serialize::serialize(raw, serializer)
            },
            #[cfg(not(feature = "json"))]
            Self::Json(raw) => serializer.serialize_str(raw),
        }
    }
}
