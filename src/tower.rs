//! Tower integration for error-trail.
//!
//! This module provides Tower `Layer` and `Service` implementations
//! that turn service errors into [`StructuredError`]s carrying fixed fields.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_trail::tower::StructuredErrorLayer;
//! use error_trail::Field;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(StructuredErrorLayer::new([Field::new("service", "api-gateway")]))
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::trace::TraceConfig;
use crate::types::{BoxError, Field, StructuredError};
use crate::wrap::wrap_error;

/// A Tower [`Layer`] that wraps service errors into [`StructuredError`].
///
/// Errors that already are structured are enriched with the layer's fields,
/// so stacking layers accumulates fields without losing the original trace.
///
/// # Example
///
/// ```rust
/// use error_trail::tower::StructuredErrorLayer;
/// use error_trail::{codes, Field};
///
/// let layer = StructuredErrorLayer::new([Field::new("service", "users"), codes::BAD_GATEWAY]);
/// assert_eq!(layer.fields().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct StructuredErrorLayer {
    fields: Arc<[Field]>,
}

impl StructuredErrorLayer {
    /// Creates a new `StructuredErrorLayer` with the given fields.
    #[inline]
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self { fields: fields.into_iter().collect() }
    }

    /// Returns the fields attached to every error.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl<S> Layer<S> for StructuredErrorLayer {
    type Service = StructuredErrorService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        StructuredErrorService { inner, fields: Arc::clone(&self.fields) }
    }
}

/// A Tower [`Service`] that wraps errors into [`StructuredError`].
///
/// This is created by [`StructuredErrorLayer`] and wraps an inner service,
/// merging the configured fields into any error it produces.
#[derive(Clone, Debug)]
pub struct StructuredErrorService<S> {
    inner: S,
    fields: Arc<[Field]>,
}

impl<S> StructuredErrorService<S> {
    /// Creates a new `StructuredErrorService` wrapping the given service.
    #[inline]
    pub fn new<I>(inner: S, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self { inner, fields: fields.into_iter().collect() }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Returns the fields attached to every error.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl<S, Request> Service<Request> for StructuredErrorService<S>
where
    S: Service<Request>,
    S::Error: Into<BoxError>,
{
    type Response = S::Response;
    type Error = StructuredError;
    type Future = StructuredErrorFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match self.inner.poll_ready(cx) {
            Poll::Ready(Err(err)) => Poll::Ready(Err(wrap_error(
                err.into(),
                self.fields.iter().cloned(),
                TraceConfig::global,
            )
            .into_inner())),
            Poll::Ready(Ok(())) => Poll::Ready(Ok(())),
            Poll::Pending => Poll::Pending,
        }
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        StructuredErrorFuture::new(self.inner.call(request), Arc::clone(&self.fields))
    }
}

pin_project! {
    /// Future returned by [`StructuredErrorService`].
    ///
    /// Wraps the inner service's future and wraps its error on failure.
    #[must_use = "futures do nothing unless polled"]
    pub struct StructuredErrorFuture<F> {
        #[pin]
        inner: F,
        fields: Option<Arc<[Field]>>,
    }
}

impl<F> StructuredErrorFuture<F> {
    #[inline]
    fn new(inner: F, fields: Arc<[Field]>) -> Self {
        Self { inner, fields: Some(fields) }
    }
}

impl<F, T, E> Future for StructuredErrorFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = Result<T, StructuredError>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => Poll::Ready(Ok(response)),
            Poll::Ready(Err(error)) => {
                let fields = this.fields.take();
                let fields = fields.iter().flat_map(|fields| fields.iter().cloned());
                Poll::Ready(Err(wrap_error(error.into(), fields, TraceConfig::global).into_inner()))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for StructuredErrorFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.fields.is_none() || self.inner.is_terminated()
    }
}

/// Extension trait for easily wrapping services with error fields.
pub trait ServiceErrorExt<Request>: Service<Request> + Sized {
    /// Wraps this service to turn all errors into structured errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_trail::tower::ServiceErrorExt;
    /// use error_trail::Field;
    ///
    /// let wrapped = my_service.with_error_fields([Field::new("layer", "database")]);
    /// ```
    fn with_error_fields<I>(self, fields: I) -> StructuredErrorService<Self>
    where
        I: IntoIterator<Item = Field>,
    {
        StructuredErrorService::new(self, fields)
    }
}

impl<S, Request> ServiceErrorExt<Request> for S where S: Service<Request> {}
