//! Ordered field storage with normalized-key upsert.
//!
//! [`FieldSet`] is where wrap-time merging happens. Incoming fields whose key
//! matches an existing one (see [`crate::key`]) replace that field's value at
//! its original position; anything else is appended. Construction with
//! [`FieldSet::from_iter`] keeps the input exactly as given.

use core::fmt::{self, Display};
use core::slice;

use crate::codes::{self, CODE_KEY};
use crate::types::{ErrorVec, Field, Value};

/// Outcome of a single [`FieldSet::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// The key was new; the field now sits at this index (the last one).
    Appended(usize),
    /// The key already existed at this index and its value was replaced.
    Replaced(usize),
}

impl Upsert {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Appended(i) | Self::Replaced(i) => i,
        }
    }
}

/// Insertion-ordered sequence of [`Field`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    inner: ErrorVec<Field>,
}

impl FieldSet {
    #[inline]
    pub fn new() -> Self {
        Self { inner: ErrorVec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.inner.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Field] {
        &self.inner
    }

    /// Index of the field whose key matches `key` under normalization.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.inner.iter().position(|field| field.matches(key))
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.position(key).map(|idx| &self.inner[idx])
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Appends without checking for an existing key.
    #[inline]
    pub fn push(&mut self, field: Field) {
        self.inner.push(field);
    }

    /// Replaces the value of the matching field in place, or appends.
    ///
    /// The existing key spelling is kept on replacement.
    pub fn upsert(&mut self, field: Field) -> Upsert {
        match self.position(&field.key) {
            Some(idx) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(key = %self.inner[idx].key, "replacing field value");
                self.inner[idx].value = field.value;
                Upsert::Replaced(idx)
            },
            None => {
                self.inner.push(field);
                Upsert::Appended(self.inner.len() - 1)
            },
        }
    }

    /// Upserts every field in order.
    pub fn merge<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        for field in fields {
            self.upsert(field);
        }
    }

    /// Integer value of the `code` field, if there is one.
    pub fn code(&self) -> Option<i64> {
        self.get(CODE_KEY).and_then(|field| field.value.as_i64())
    }

    /// Sets the `code` field, replacing an existing one in place.
    pub fn set_code(&mut self, code: i64) -> Upsert {
        self.upsert(codes::code(code))
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Field> {
        self.inner.into_vec()
    }

    /// Looks up a value by key.
    #[inline]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).map(Field::value)
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl Extend<Field> for FieldSet {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = smallvec::IntoIter<[Field; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl core::ops::Index<usize> for FieldSet {
    type Output = Field;

    fn index(&self, index: usize) -> &Field {
        &self.inner[index]
    }
}

/// Space-separated `key=value` pairs.
impl Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.inner.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(field, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.inner.len()))?;
        for field in &self.inner {
            map.serialize_entry(field.key(), field.value())?;
        }
        map.end()
    }
}
