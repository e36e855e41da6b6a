//! Result of wrapping an error.

use core::ops::{Deref, DerefMut};

use crate::types::StructuredError;

/// Says whether a wrap created a new [`StructuredError`] or enriched the one
/// it was given.
///
/// # Examples
///
/// ```
/// use error_trail::{wrap, Field, StructuredError};
///
/// let created = wrap(Some(std::fmt::Error), [Field::new("step", "render")]).unwrap();
/// assert!(created.is_created());
///
/// let enriched = wrap(Some(created.into_inner()), [Field::new("step", "flush")]).unwrap();
/// assert!(enriched.is_enriched());
/// assert_eq!(enriched.fields().len(), 1);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub enum Wrapped {
    /// A plain error was turned into a new structured error with a fresh trace.
    Created(StructuredError),
    /// An existing structured error had fields merged into it; its trace is unchanged.
    Enriched(StructuredError),
}

impl Wrapped {
    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    #[inline]
    pub fn is_enriched(&self) -> bool {
        matches!(self, Self::Enriched(_))
    }

    #[inline]
    pub fn into_inner(self) -> StructuredError {
        match self {
            Self::Created(err) | Self::Enriched(err) => err,
        }
    }
}

impl Deref for Wrapped {
    type Target = StructuredError;

    fn deref(&self) -> &StructuredError {
        match self {
            Self::Created(err) | Self::Enriched(err) => err,
        }
    }
}

impl DerefMut for Wrapped {
    fn deref_mut(&mut self) -> &mut StructuredError {
        match self {
            Self::Created(err) | Self::Enriched(err) => err,
        }
    }
}

impl From<Wrapped> for StructuredError {
    #[inline]
    fn from(wrapped: Wrapped) -> Self {
        wrapped.into_inner()
    }
}
