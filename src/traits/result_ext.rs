//! Extension trait for wrapping the error side of a `Result`.
//!
//! This module provides [`ResultExt`], which runs the wrap engine on `Err`
//! without verbose `.map_err()` chains. The trace of a newly created error
//! starts at the line calling the extension method.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::{codes, Field, StructuredError};
//!
//! fn load_config() -> Result<String, StructuredError> {
//!     std::fs::read_to_string("/definitely/not/here.toml")
//!         .wrap_err([Field::new("path", "/definitely/not/here.toml"), codes::NOT_FOUND])
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.get_code(), 404);
//! ```

use crate::codes;
use crate::trace::TraceConfig;
use crate::types::{BoxError, Field, StructuredError};
use crate::wrap::wrap_error;

/// Extension trait for wrapping `Result` errors into [`StructuredError`].
///
/// Because `StructuredError` itself converts into a [`BoxError`], the same
/// methods enrich results that already carry a structured error, keeping
/// their original trace.
///
/// # Examples
///
/// ```
/// use error_trail::traits::ResultExt;
/// use error_trail::{Field, StructuredError};
///
/// fn inner() -> Result<(), StructuredError> {
///     Err(std::fmt::Error).wrap_err([Field::new("layer", "inner")])
/// }
///
/// fn outer() -> Result<(), StructuredError> {
///     inner().wrap_err([Field::new("Layer", "outer"), Field::new("attempt", 2)])
/// }
///
/// let err = outer().unwrap_err();
/// assert_eq!(err.fields().to_string(), "layer=outer attempt=2");
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error with the given fields.
    fn wrap_err<I>(self, fields: I) -> Result<T, StructuredError>
    where
        I: IntoIterator<Item = Field>;

    /// Wraps the error with lazily built fields.
    ///
    /// The closure is only called if the `Result` is an `Err`.
    fn wrap_err_with<F, I>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Field>;

    /// Wraps the error and sets its `code` field.
    fn with_code(self, code: i64) -> Result<T, StructuredError>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn wrap_err<I>(self, fields: I) -> Result<T, StructuredError>
    where
        I: IntoIterator<Item = Field>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_error(err.into(), fields, TraceConfig::global).into_inner()),
        }
    }

    #[inline(never)]
    fn wrap_err_with<F, I>(self, f: F) -> Result<T, StructuredError>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Field>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_error(err.into(), f(), TraceConfig::global).into_inner()),
        }
    }

    #[inline(never)]
    fn with_code(self, code: i64) -> Result<T, StructuredError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                Err(wrap_error(err.into(), [codes::code(code)], TraceConfig::global).into_inner())
            },
        }
    }
}
