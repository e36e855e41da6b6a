//! Future wrapper that runs the wrap engine on error.
//!
//! This module provides `WrapFuture`, which wraps a `Future<Output = Result<T, E>>`
//! and turns its error into a [`StructuredError`] only when the future
//! resolves to one.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::trace::TraceConfig;
use crate::types::{BoxError, Field, StructuredError};
use crate::wrap::wrap_error;

pin_project! {
    /// A Future wrapper that wraps errors lazily.
    ///
    /// The field producer is only called when the inner future resolves to an
    /// error. A trace is captured at that point, so for a plain error it starts
    /// at the frame polling this future.
    ///
    /// # Cancel Safety
    ///
    /// `WrapFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_trail::prelude_async::*;
    ///
    /// async fn example() -> Result<i32, StructuredError> {
    ///     async { Err::<i32, _>(std::fmt::Error) }
    ///         .wrap_err([Field::new("step", "render")])
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapFuture<Fut, F> {
        #[pin]
        future: Fut,
        fields_fn: Option<F>,
    }
}

impl<Fut, F> WrapFuture<Fut, F> {
    /// Creates a new `WrapFuture` with the given future and field producer.
    #[inline]
    pub fn new(future: Fut, fields_fn: F) -> Self {
        Self { future, fields_fn: Some(fields_fn) }
    }
}

impl<Fut, F, I, T, E> Future for WrapFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> I,
    I: IntoIterator<Item = Field>,
    E: Into<BoxError>,
{
    type Output = Result<T, StructuredError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.future.poll(cx) {
            Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
            Poll::Ready(Err(err)) => {
                let fields: Option<I> = this.fields_fn.take().map(|f| f());
                let wrapped =
                    wrap_error(err.into(), fields.into_iter().flatten(), TraceConfig::global);
                Poll::Ready(Err(wrapped.into_inner()))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<Fut, F, I, T, E> FusedFuture for WrapFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    F: FnOnce() -> I,
    I: IntoIterator<Item = Field>,
    E: Into<BoxError>,
{
    fn is_terminated(&self) -> bool {
        // The producer is taken on error completion
        self.fields_fn.is_none() || self.future.is_terminated()
    }
}
