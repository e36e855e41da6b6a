//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.wrap_err()` and `.wrap_err_with()` for futures, mirroring
//! the sync [`ResultExt`](crate::traits::ResultExt) trait.

use core::future::Future;

use crate::types::Field;

use super::wrap_future::WrapFuture;

/// Extension trait for wrapping the errors of Result-returning futures.
///
/// # Examples
///
/// ```rust,no_run
/// use error_trail::prelude_async::*;
///
/// #[derive(Debug)]
/// struct User;
///
/// async fn fetch_from_db(_id: u64) -> Result<User, std::io::Error> {
///     Err(std::io::Error::other("connection reset"))
/// }
///
/// async fn fetch_user(id: u64) -> Result<User, StructuredError> {
///     fetch_from_db(id)
///         .wrap_err_with(|| [Field::new("user_id", id), codes::SERVICE_UNAVAILABLE])
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the future's error with the given fields.
    fn wrap_err<I>(self, fields: I) -> WrapFuture<Self, impl FnOnce() -> I>
    where
        I: IntoIterator<Item = Field>,
    {
        self.wrap_err_with(move || fields)
    }

    /// Wraps the future's error with lazily built fields.
    ///
    /// The closure is only called when the future resolves to an error.
    fn wrap_err_with<F, I>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Field>;
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn wrap_err_with<F, I>(self, f: F) -> WrapFuture<Self, F>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = Field>,
    {
        WrapFuture::new(self, f)
    }
}
