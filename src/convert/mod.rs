//! Classification and pass-through helpers.
//!
//! - [`is_structured`] / [`as_structured`] classify or coerce any error into a
//!   [`StructuredError`].
//! - [`is`] / [`find`] walk the `source()` chain the way the standard library's
//!   downcasting does, so they see through structured errors created by
//!   wrapping a plain one.
//!
//! # Examples
//!
//! ```
//! use error_trail::{convert, wrap, Field};
//! use std::io;
//!
//! let err = wrap(Some(io::Error::other("disk full")), [Field::new("path", "/var")])
//!     .unwrap()
//!     .into_inner();
//!
//! assert!(convert::is_structured(&err));
//! assert!(convert::is::<io::Error>(&err));
//! assert_eq!(convert::find::<io::Error>(&err).map(|e| e.to_string()), Some("disk full".into()));
//! ```

use std::error::Error;

use crate::trace::TraceConfig;
use crate::types::{BoxError, StructuredError};
use crate::wrap::wrap_error;

/// Whether `err` itself is a [`StructuredError`]. No coercion, no chain walk.
#[inline]
pub fn is_structured(err: &(dyn Error + 'static)) -> bool {
    err.is::<StructuredError>()
}

/// Returns `err` unchanged when it already is structured, otherwise wraps it
/// with no fields. `None` stays `None`.
///
/// # Examples
///
/// ```
/// use error_trail::convert::as_structured;
/// use error_trail::StructuredError;
///
/// assert!(as_structured(None::<StructuredError>).is_none());
///
/// let err = as_structured(Some(std::fmt::Error)).unwrap();
/// assert!(err.fields().is_empty());
/// ```
#[inline(never)]
pub fn as_structured<E>(err: Option<E>) -> Option<StructuredError>
where
    E: Into<BoxError>,
{
    Some(wrap_error(err?.into(), core::iter::empty(), TraceConfig::global).into_inner())
}

/// Whether `err` or any error in its `source()` chain is a `T`.
pub fn is<T>(err: &(dyn Error + 'static)) -> bool
where
    T: Error + 'static,
{
    find::<T>(err).is_some()
}

/// First error of type `T` in the chain starting at `err`.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(found) = err.downcast_ref::<T>() {
            return Some(found);
        }
        current = err.source();
    }
    None
}
