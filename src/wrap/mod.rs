//! The wrap/merge engine.
//!
//! Wrapping takes any error and returns a [`StructuredError`]:
//! - a plain error becomes a new structured error whose message is the plain
//!   error's `Display` output and whose trace starts at the wrap call site
//! - a structured error has the fields merged into it and keeps its trace
//! - no error stays no error
//!
//! [`wrap`] uses the process-wide [`TraceConfig::global`] defaults; a
//! [`Tracer`] carries its own configuration.

use crate::trace::{self, TraceConfig};
use crate::types::{BoxError, Field, StructuredError, Wrapped};

/// Frames between the engine's capture and the user's call site: the capture
/// itself, [`wrap_error`], and the public entry point.
const ENTRY_SKIP: usize = 3;

/// Wraps `err`, merging `fields` into it.
///
/// Returns `None` for `None`, [`Wrapped::Enriched`] when `err` already is a
/// [`StructuredError`], and [`Wrapped::Created`] otherwise.
///
/// # Examples
///
/// ```
/// use error_trail::{codes, wrap, StructuredError};
///
/// let err = StructuredError::new("boom", [codes::code(200)]);
/// let err = wrap(Some(err), [codes::code(500)]).unwrap();
///
/// assert!(err.is_enriched());
/// assert_eq!(err.get_code(), 500);
/// assert_eq!(err.fields().len(), 1);
///
/// assert!(wrap(None::<StructuredError>, [codes::NOT_FOUND]).is_none());
/// ```
#[inline(never)]
pub fn wrap<E, I>(err: Option<E>, fields: I) -> Option<Wrapped>
where
    E: Into<BoxError>,
    I: IntoIterator<Item = Field>,
{
    Some(wrap_error(err?.into(), fields, TraceConfig::global))
}

/// Shared body of every wrapping entry point.
///
/// The configuration is only resolved when a trace is actually captured.
/// Callers must be public entry points invoked directly by user code so the
/// trace starts at the right frame.
#[inline(never)]
pub(crate) fn wrap_error<I, C>(err: BoxError, fields: I, config: C) -> Wrapped
where
    I: IntoIterator<Item = Field>,
    C: FnOnce() -> TraceConfig,
{
    match err.downcast::<StructuredError>() {
        Ok(mut structured) => {
            structured.merge(fields);
            Wrapped::Enriched(*structured)
        },
        Err(plain) => {
            let trace = trace::capture(ENTRY_SKIP, &config());
            let message = plain.to_string();
            Wrapped::Created(StructuredError::from_parts(
                message,
                trace,
                fields.into_iter().collect(),
                Some(plain.into()),
            ))
        },
    }
}

/// Error factory bound to an explicit [`TraceConfig`].
///
/// # Examples
///
/// ```
/// use error_trail::trace::TraceConfig;
/// use error_trail::{Field, Tracer};
///
/// let tracer = Tracer::new(TraceConfig::default().max_depth(2).namespace("no_frames_match"));
///
/// let err = tracer.error("quota exceeded", [Field::new("tenant", "acme")]);
/// assert_eq!(err.trace(), "");
///
/// let wrapped = tracer.wrap(Some(std::fmt::Error), []).unwrap();
/// assert_eq!(wrapped.message(), "an error occurred when formatting an argument");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    config: TraceConfig,
}

impl Tracer {
    #[inline]
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    /// Tracer using the current process-wide defaults.
    #[inline]
    pub fn global() -> Self {
        Self::new(TraceConfig::global())
    }

    #[inline]
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Creates a structured error whose trace starts at the caller.
    #[inline(never)]
    pub fn error<M, I>(&self, message: M, fields: I) -> StructuredError
    where
        M: Into<String>,
        I: IntoIterator<Item = Field>,
    {
        let trace = trace::capture(2, &self.config);
        StructuredError::from_parts(message.into(), trace, fields.into_iter().collect(), None)
    }

    /// [`wrap`] with this tracer's configuration.
    #[inline(never)]
    pub fn wrap<E, I>(&self, err: Option<E>, fields: I) -> Option<Wrapped>
    where
        E: Into<BoxError>,
        I: IntoIterator<Item = Field>,
    {
        Some(wrap_error(err?.into(), fields, || self.config.clone()))
    }
}
