//! Message/trace pair handed to logging collaborators.

use core::fmt::{self, Display};

/// Human-readable message of a [`StructuredError`](crate::StructuredError)
/// together with the call-site trace captured when it was created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Message {
    pub message: String,
    pub trace: String,
}

impl Message {
    #[inline]
    pub fn new(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self { message: message.into(), trace: trace.into() }
    }
}

/// Renders `message` alone, or `message (at trace)` when a trace exists.
impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trace.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.trace)
        }
    }
}
