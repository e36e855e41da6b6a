//! Structured error with a call-site trace and mergeable fields.
//!
//! This module provides [`StructuredError`], an error value carrying:
//! - a human-readable message, fixed at creation
//! - a trace of the application frames that created it, captured once
//! - an ordered [`FieldSet`] that later wraps enrich in place
//! - optionally, the plain error it was created from

use std::error::Error;
use std::sync::Arc;

use crate::codes::MISSING_CODE;
use crate::trace::{self, TraceConfig};
use crate::types::{Field, FieldSet, Message};

mod traits;

/// Error value enriched with a trace and diagnostic fields.
///
/// # Examples
///
/// ```
/// use error_trail::{codes, Field, StructuredError};
///
/// let mut err = StructuredError::new("payment declined", [codes::code(402), Field::new("order_id", 77)]);
///
/// err.merge([Field::new("ORDER-ID", 78), Field::new("retry", false)]);
///
/// assert_eq!(err.get_code(), 402);
/// assert_eq!(err.fields().len(), 3);
/// assert_eq!(err.fields()[1].to_string(), "order_id=78");
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct StructuredError {
    pub(crate) msg: Message,
    pub(crate) fields: FieldSet,
    pub(crate) source: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl StructuredError {
    /// Creates an error whose trace starts at the caller, using the process
    /// defaults from [`TraceConfig::global`].
    ///
    /// Fields are stored exactly as given.
    #[inline(never)]
    pub fn new<M, I>(message: M, fields: I) -> Self
    where
        M: Into<String>,
        I: IntoIterator<Item = Field>,
    {
        let trace = trace::capture(2, &TraceConfig::global());
        Self::from_parts(message.into(), trace, fields.into_iter().collect(), None)
    }

    /// Like [`new`](Self::new) but with an explicit trace configuration.
    #[inline(never)]
    pub fn with_config<M, I>(config: &TraceConfig, message: M, fields: I) -> Self
    where
        M: Into<String>,
        I: IntoIterator<Item = Field>,
    {
        let trace = trace::capture(2, config);
        Self::from_parts(message.into(), trace, fields.into_iter().collect(), None)
    }

    /// Assembles an error from already computed parts without capturing.
    #[inline]
    pub fn from_parts(
        message: String,
        trace: String,
        fields: FieldSet,
        source: Option<Arc<dyn Error + Send + Sync + 'static>>,
    ) -> Self {
        Self { msg: Message { message, trace }, fields, source }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.msg.message
    }

    /// The trace captured at creation; empty when no application frame matched.
    #[inline]
    pub fn trace(&self) -> &str {
        &self.msg.trace
    }

    /// Message and trace, for logging collaborators.
    #[inline]
    pub fn get_message(&self) -> &Message {
        &self.msg
    }

    #[inline]
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Merges fields into this error.
    ///
    /// A field whose key matches an existing one under normalization replaces
    /// that field's value in place; other fields are appended in order. The
    /// trace is left untouched.
    #[inline]
    pub fn merge<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields.merge(fields);
        self
    }

    /// Builder form of [`merge`](Self::merge).
    #[inline]
    pub fn with_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields.merge(fields);
        self
    }

    /// Sets the `code` field, replacing an existing one in place.
    ///
    /// Setting a code cannot fail; the return value is always `true`.
    #[inline]
    pub fn set_code(&mut self, code: i64) -> bool {
        self.fields.set_code(code);
        true
    }

    /// Integer value of the `code` field, or [`MISSING_CODE`] (-1).
    #[inline]
    pub fn get_code(&self) -> i64 {
        self.code().unwrap_or(MISSING_CODE)
    }

    /// Integer value of the `code` field.
    #[inline]
    pub fn code(&self) -> Option<i64> {
        self.fields.code()
    }

    /// The plain error this one was created from, if any.
    #[inline]
    pub fn source_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Consumes the error, returning its message/trace pair and fields.
    #[inline]
    pub fn into_parts(self) -> (Message, FieldSet) {
        (self.msg, self.fields)
    }
}
