//! Aggregate of validation failures that is itself an error.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::prelude::*;

use super::field_error::{Cause, FieldError};

/// One member of an [`ErrorList`].
#[derive(Debug, Clone)]
pub enum ErrorEntry {
    /// A structured field failure.
    Field(FieldError),
    /// A nested aggregate, e.g. the failures of a sub-record.
    List(ErrorList),
    /// Any other error reported alongside field failures.
    Other(Cause),
}

impl ErrorEntry {
    /// Returns the field error, if this entry is one.
    pub fn as_field(&self) -> Option<&FieldError> {
        match self {
            ErrorEntry::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorEntry::Field(e) => Display::fmt(e, f),
            ErrorEntry::List(e) => Display::fmt(e, f),
            ErrorEntry::Other(e) => Display::fmt(e, f),
        }
    }
}

impl From<FieldError> for ErrorEntry {
    fn from(error: FieldError) -> Self {
        ErrorEntry::Field(error)
    }
}

impl From<ErrorList> for ErrorEntry {
    fn from(errors: ErrorList) -> Self {
        ErrorEntry::List(errors)
    }
}

/// An ordered collection of failures that renders as a single error.
///
/// Entries keep discovery order, but the rendered message sorts the
/// individual messages and joins them with `;`, so the output does not
/// depend on the order failures were found in.
///
/// # Example
///
/// ```rust
/// use validkit::{ErrorList, FieldError};
///
/// let mut errors = ErrorList::new();
/// errors.push(FieldError::new("B", "x", "required", None));
/// errors.push(FieldError::new("A", "y", "required", None));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.to_string(), "A: y;B: x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorList(Vec<ErrorEntry>);

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding a single entry.
    pub fn single(entry: impl Into<ErrorEntry>) -> Self {
        Self(vec![entry.into()])
    }

    /// Appends a field error or nested list.
    pub fn push(&mut self, entry: impl Into<ErrorEntry>) {
        let entry = entry.into();
        tracing::trace!(error = %entry, "collected validation error");
        self.0.push(entry);
    }

    /// Appends an arbitrary error.
    pub fn push_other(&mut self, error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) {
        self.push(ErrorEntry::Other(Arc::from(error.into())));
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no failures were collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.0.iter()
    }

    /// Returns the entries as a slice.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.0
    }

    /// Returns every field error, descending into nested lists.
    pub fn field_errors(&self) -> Vec<&FieldError> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a FieldError>) {
        for entry in &self.0 {
            match entry {
                ErrorEntry::Field(e) => out.push(e),
                ErrorEntry::List(list) => list.collect_fields(out),
                ErrorEntry::Other(_) => {}
            }
        }
    }

    /// Returns the rendered message of every entry, sorted.
    pub fn messages(&self) -> Vec<String> {
        let mut messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        messages.sort();
        messages
    }

    /// Maps each failing field name to its cause message.
    ///
    /// Nested lists are flattened. When a field fails more than once the
    /// last message wins, keeping the position of its first occurrence.
    pub fn by_field(&self) -> IndexMap<String, String> {
        self.field_errors()
            .into_iter()
            .map(|e| (e.name.clone(), e.message()))
            .collect()
    }

    /// Like [`by_field`](Self::by_field), keyed by serialization key where present.
    pub fn by_serialization_key(&self) -> IndexMap<String, String> {
        self.field_errors()
            .into_iter()
            .map(|e| (e.display_name().to_string(), e.message()))
            .collect()
    }

    /// Returns the cause message recorded for `field`, if it failed.
    pub fn error_for(&self, field: &str) -> Option<String> {
        self.field_errors()
            .into_iter()
            .rev()
            .find(|e| e.name == field)
            .map(FieldError::message)
    }

    /// Renders the failures as a JSON object of serialization key to message.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .by_serialization_key()
            .into_iter()
            .map(|(key, message)| (key, Value::String(message)))
            .collect();
        Value::Object(map)
    }

    /// Returns `Ok(value)` when no errors were collected, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            tracing::debug!(errors = self.len(), "validation failed");
            Err(self)
        }
    }
}

impl Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(";"))
    }
}

impl StdError for ErrorList {}

impl Semigroup for ErrorList {
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl From<FieldError> for ErrorList {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().map(ErrorEntry::Field).collect())
    }
}

impl FromIterator<ErrorEntry> for ErrorList {
    fn from_iter<I: IntoIterator<Item = ErrorEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorList>();
    assert_sync::<ErrorList>();
};
