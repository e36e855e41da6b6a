use super::StructuredError;
use core::fmt::{self, Display};
use std::error::Error;

/// `{}` prints the message. `{:#}` adds the trace and one line per field.
impl Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(self.message());
        }

        write!(f, "Error: {}", self.message())?;
        if !self.trace().is_empty() {
            write!(f, "\nTrace: {}", self.trace())?;
        }
        if !self.fields.is_empty() {
            f.write_str("\nFields:")?;
            for field in &self.fields {
                write!(f, "\n  - {field}")?;
            }
        }
        Ok(())
    }
}

impl Error for StructuredError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|err| err as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StructuredError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StructuredError", 3)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("trace", self.trace())?;
        state.serialize_field("fields", &self.fields)?;
        state.end()
    }
}
