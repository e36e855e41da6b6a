//! Structured errors with call-site traces and mergeable diagnostic fields.
//!
//! The common types are re-exported from the crate root, so consumers can
//! simply depend on `error_trail::*` or pick focused modules as needed.
//!
//! An error is created once, close to where things went wrong, and picks up
//! a compact trace of the application frames that led there. As it travels up
//! the call chain every layer can wrap it again: fields with a matching key
//! (ignoring case, `_` and `-`) are replaced in place, new ones are appended,
//! and the original trace is kept.
//!
//! # Examples
//!
//! ## Creating and Enriching
//!
//! ```
//! use error_trail::{codes, wrap, Field, StructuredError};
//!
//! let err = StructuredError::new("boom", [codes::code(200)]);
//! let err = wrap(Some(err), [codes::code(500), Field::new("user_id", 42)]).unwrap();
//!
//! assert_eq!(err.get_code(), 500);
//! assert_eq!(err.fields().len(), 2);
//! ```
//!
//! ## Wrapping Plain Errors
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_settings() -> Result<String, StructuredError> {
//!     std::fs::read_to_string("/no/such/settings.toml")
//!         .wrap_err(fields!["path" => "/no/such/settings.toml"])
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert!(err.source_error().is_some());
//! assert_eq!(err.get_code(), -1);
//! ```
//!
//! ## Configuring Traces
//!
//! ```
//! use error_trail::trace::{FrameFilter, TraceConfig};
//! use error_trail::Tracer;
//!
//! let tracer = Tracer::new(TraceConfig::default().max_depth(3).filter(FrameFilter::contains("my_app")));
//! let err = tracer.error("declined", []);
//! // No frame of this doc test lives in `my_app`.
//! assert_eq!(err.trace(), "");
//! ```

/// Conventional `code` field and status code constants
pub mod codes;
/// Classification and pass-through helpers
pub mod convert;
/// Field key normalization
pub mod key;
/// Macros for building fields and errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Call-site trace capture and configuration
pub mod trace;
/// Extension traits for wrapping errors
pub mod traits;
/// StructuredError and its building blocks
pub mod types;
/// The wrap/merge engine
pub mod wrap;

/// JSON-aware field producer (requires `json` feature)
#[cfg(feature = "json")]
pub mod json;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

/// Tracing integration - event emission and span fields (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::{as_structured, is_structured};
pub use traits::*;
pub use types::{
    BoxError, Field, FieldSet, Message, StructuredError, StructuredResult, Upsert, Value, Wrapped,
};
pub use wrap::{wrap, Tracer};
