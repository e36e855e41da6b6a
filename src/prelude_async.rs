//! Async prelude - all async utilities in one import.
//!
//! # Examples
//!
//! ```rust
//! use error_trail::prelude_async::*;
//!
//! async fn load(id: u64) -> StructuredResult<String> {
//!     async { Err::<String, _>(std::io::Error::other("timeout")) }
//!         .wrap_err([Field::new("id", id), codes::GATEWAY_TIMEOUT])
//!         .await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureResultExt, WrapFuture};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{emit, LogResultExt, ResultSpanExt};

#[cfg(feature = "tower")]
pub use crate::tower::{ServiceErrorExt, StructuredErrorLayer, StructuredErrorService};
