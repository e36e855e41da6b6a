//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`], [`structured!`]
//! - **Types**: [`StructuredError`], [`Field`], [`Value`], [`Wrapped`]
//! - **Functions**: [`wrap`], [`as_structured`], [`is_structured`]
//! - **Traits**: [`ResultExt`]
//! - **Modules**: [`codes`]
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn parse_port(raw: &str) -> StructuredResult<u16> {
//!     raw.parse::<u16>().wrap_err([Field::new("raw", raw.to_string()), codes::BAD_REQUEST])
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.get_code(), 400);
//! ```

// Macros
pub use crate::{fields, structured};

// Core types
pub use crate::types::{Field, StructuredError, StructuredResult, Value, Wrapped};

// Functions
pub use crate::convert::{as_structured, is_structured};
pub use crate::wrap::wrap;

// Traits
pub use crate::traits::ResultExt;

pub use crate::codes;
