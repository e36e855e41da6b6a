//! Ergonomic macros for building fields and structured errors.
//!
//! - [`macro@crate::fields`] - Builds a `Vec<Field>` from `key => value` pairs.
//! - [`macro@crate::structured`] - Formats a message and creates a
//!   [`StructuredError`](crate::StructuredError) whose trace starts at the
//!   macro call site.
//!
//! # Examples
//!
//! ```
//! use error_trail::{fields, structured, codes};
//!
//! let user_id = 42;
//! let err = structured!("user {} not found", user_id; "user_id" => user_id, "code" => 404);
//!
//! assert_eq!(err.message(), "user 42 not found");
//! assert_eq!(err.get_code(), 404);
//!
//! let mut extra = fields!["attempt" => 3];
//! extra.push(codes::SERVICE_UNAVAILABLE);
//! assert_eq!(extra.len(), 2);
//! ```

/// Builds a `Vec<Field>` from `key => value` pairs.
///
/// Values go through `Into<Value>`, so integers, floats, booleans, strings and
/// byte vectors are accepted directly.
///
/// # Examples
///
/// ```
/// use error_trail::{fields, Value};
///
/// let fields = fields!["user_id" => 7_u64, "admin" => false, "name" => "kim"];
/// assert_eq!(fields[0].value(), &Value::Uint(7));
/// assert_eq!(fields[2].to_string(), "name=kim");
///
/// assert!(fields![].is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Field::new($key, $value)),+]
    };
}

/// Creates a [`StructuredError`](crate::StructuredError) from a format string
/// and optional `key => value` fields after a `;`.
///
/// # Examples
///
/// ```
/// use error_trail::structured;
///
/// let err = structured!("plain message");
/// assert!(err.fields().is_empty());
///
/// let order = 9;
/// let err = structured!("order {order} rejected"; "order_id" => order, "reason" => "stock");
/// assert_eq!(err.fields().to_string(), "order_id=9 reason=stock");
/// ```
#[macro_export]
macro_rules! structured {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::StructuredError::new(::std::format!($fmt $(, $arg)*), $crate::fields![])
    };
    ($fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {
        $crate::StructuredError::new(
            ::std::format!($fmt $(, $arg)*),
            $crate::fields![$($key => $value),+],
        )
    };
}
