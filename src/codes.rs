//! The conventional `code` field and HTTP-style status code constants.
//!
//! # Examples
//!
//! ```
//! use error_trail::{codes, StructuredError};
//!
//! let err = StructuredError::new("not here", [codes::NOT_FOUND]);
//! assert_eq!(err.get_code(), 404);
//!
//! let err = StructuredError::new("teapot", [codes::code(418)]);
//! assert_eq!(err.code(), Some(418));
//! ```

use std::borrow::Cow;

use crate::types::{Field, Value};

/// Key of the classification field.
pub const CODE_KEY: &str = "code";

/// Returned by [`get_code`](crate::StructuredError::get_code) when no code is set.
pub const MISSING_CODE: i64 = -1;

/// Builds a `code` field.
#[inline]
pub fn code(code: i64) -> Field {
    Field { key: Cow::Borrowed(CODE_KEY), value: Value::Int(code) }
}

macro_rules! status_codes {
    ($($name:ident = $status:literal),* $(,)?) => {
        $(
            #[doc = concat!("`code` field with status ", stringify!($status), ".")]
            pub const $name: Field = Field { key: Cow::Borrowed(CODE_KEY), value: Value::Int($status) };
        )*
    };
}

status_codes!(
    BAD_REQUEST = 400,
    UNAUTHORIZED = 401,
    FORBIDDEN = 403,
    NOT_FOUND = 404,
    METHOD_NOT_ALLOWED = 405,
    NOT_ACCEPTABLE = 406,
    REQUEST_TIMEOUT = 408,
    PRECONDITION_FAILED = 412,
    UNSUPPORTED_MEDIA_TYPE = 415,
    TOO_MANY_REQUESTS = 429,
    INTERNAL_SERVER_ERROR = 500,
    NOT_IMPLEMENTED = 501,
    BAD_GATEWAY = 502,
    SERVICE_UNAVAILABLE = 503,
    GATEWAY_TIMEOUT = 504,
);
