//! Field key normalization.
//!
//! Two keys name the same field when they are equal after removing `_` and `-`
//! and lowercasing, so `"USER_ID"`, `"userid"` and `"User-Id"` all collide.
//!
//! # Examples
//!
//! ```
//! use error_trail::key::{keys_equal, normalize};
//!
//! assert_eq!(normalize("User-Id"), "userid");
//! assert!(keys_equal("USER_ID", "user-id"));
//! assert!(!keys_equal("user", "users"));
//! ```

#[inline]
fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

#[inline]
fn folded(key: &str) -> impl Iterator<Item = char> + '_ {
    key.chars().filter(|c| !is_separator(*c)).flat_map(char::to_lowercase)
}

/// Returns the canonical form of `key` used for field comparison.
#[must_use]
pub fn normalize(key: &str) -> String {
    folded(key).collect()
}

/// Compares two keys under normalization without allocating.
#[inline]
#[must_use]
pub fn keys_equal(a: &str, b: &str) -> bool {
    folded(a).eq(folded(b))
}
