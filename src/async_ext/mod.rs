//! Async extensions for error-trail.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_trail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Result<User, StructuredError> {
//!     fetch_from_db(id)
//!         .wrap_err([Field::new("user_id", id)])
//!         .await
//! }
//! ```

mod future_ext;
mod wrap_future;

pub use future_ext::FutureResultExt;
pub use wrap_future::WrapFuture;
