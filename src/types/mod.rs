//! Error types and utilities.
//!
//! This module provides the structured error value and the pieces it is made
//! of: typed [`Value`]s, named [`Field`]s, the ordered [`FieldSet`] that merges
//! them, and the [`Message`] pair handed to logging collaborators.
//!
//! # Examples
//!
//! ```
//! use error_trail::{codes, Field, StructuredError};
//!
//! let mut err = StructuredError::new("database connection failed", [Field::new("db", "primary")]);
//! err.set_code(503);
//! err.merge([Field::new("DB", "replica")]);
//!
//! assert_eq!(err.to_string(), "database connection failed");
//! assert_eq!(err.fields().to_string(), "db=replica code=503");
//! ```
use smallvec::SmallVec;

pub mod field;
pub mod field_set;
pub mod message;
pub mod structured_error;
pub mod value;
pub mod wrapped;

pub use field::*;
pub use field_set::*;
pub use message::*;
pub use structured_error::*;
pub use value::*;
pub use wrapped::*;

/// SmallVec-backed collection used for storing fields.
///
/// Uses inline storage for up to 4 elements to avoid heap allocations
/// in common cases where only a few fields are attached.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Boxed thread-safe error, the input type of wrapping.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias that fails with [`StructuredError`].
pub type StructuredResult<T> = Result<T, StructuredError>;
