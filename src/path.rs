//! Field path representation for locating a failing field inside nested records.
//!
//! A [`FieldPath`] lists the ancestor field names of a failure, from the
//! outermost record down to (but not including) the failing field itself.

use std::fmt::{self, Display};

/// The ancestor field names of a failing field.
///
/// Paths are immutable: [`push_field`](FieldPath::push_field) returns a new
/// path and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use validkit::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("User")
///     .push_field("Address");
///
/// assert_eq!(path.to_string(), "User.Address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Creates an empty path representing a top-level field.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field name.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Returns a new path with a field name appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the field names, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Joins the path and a trailing field name with `.`.
    pub fn qualify(&self, name: &str) -> String {
        if self.segments.is_empty() {
            return name.to_string();
        }
        let mut joined = self.segments.join(".");
        joined.push('.');
        joined.push_str(name);
        joined
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for FieldPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}
