//! Tracing integration for error-trail.
//!
//! This module hands structured errors to the `tracing` ecosystem, the
//! logging collaborator this crate prepares errors for:
//!
//! - [`emit`] records one event per error with its message, trace, code and fields
//! - [`LogResultExt`] emits on `Err` and passes the result through
//! - [`ResultSpanExt`] records the current span name as a `span` field
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::{Level, Span};

use crate::trace::TraceConfig;
use crate::types::{BoxError, Field, StructuredError};
use crate::wrap::wrap_error;

/// Key of the field added by [`ResultSpanExt`].
pub const SPAN_KEY: &str = "span";

/// Level an error is emitted at: `WARN` for 4xx codes, `ERROR` otherwise.
pub fn level_for(err: &StructuredError) -> Level {
    match err.code() {
        Some(400..=499) => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Records `err` as a single event.
///
/// # Example
///
/// ```rust,ignore
/// use error_trail::tracing_ext::emit;
///
/// if let Err(err) = handle(request) {
///     emit(&err);
/// }
/// ```
pub fn emit(err: &StructuredError) {
    macro_rules! record {
        ($level:expr) => {
            tracing::event!(
                $level,
                error.message = %err.message(),
                error.trace = %err.trace(),
                error.code = err.get_code(),
                error.fields = %err.fields(),
                "structured error"
            )
        };
    }

    let level = level_for(err);
    if level == Level::WARN {
        record!(Level::WARN);
    } else {
        record!(Level::ERROR);
    }
}

/// Extension trait emitting structured errors as they pass by.
pub trait LogResultExt {
    /// Calls [`emit`] on `Err` and returns `self` unchanged.
    fn log_err(self) -> Self;
}

impl<T> LogResultExt for Result<T, StructuredError> {
    fn log_err(self) -> Self {
        if let Err(err) = &self {
            emit(err);
        }
        self
    }
}

/// Extension trait for `Result` types to record span context on errors.
pub trait ResultSpanExt<T, E> {
    /// Wraps the error with a `span` field naming the current span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_trail::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> Result<Data, StructuredError> {
    ///     do_work().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Result<T, StructuredError>;

    /// Wraps the error with a `span` field naming `span`.
    fn with_span(self, span: &Span) -> Result<T, StructuredError>;
}

impl<T, E> ResultSpanExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn with_current_span(self) -> Result<T, StructuredError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let field = span_field(&Span::current());
                Err(wrap_error(err.into(), [field], TraceConfig::global).into_inner())
            },
        }
    }

    #[inline(never)]
    fn with_span(self, span: &Span) -> Result<T, StructuredError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                Err(wrap_error(err.into(), [span_field(span)], TraceConfig::global).into_inner())
            },
        }
    }
}

/// Converts a tracing span to a `span` field holding its name.
fn span_field(span: &Span) -> Field {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    Field::string(SPAN_KEY, name)
}
