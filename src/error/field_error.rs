//! Single field validation failure.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::path::FieldPath;
use crate::tag::FieldTags;

/// Shared, thread-safe underlying cause of a failure.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// A single validation failure with full context.
///
/// `FieldError` records:
/// - **name**: the field that failed
/// - **cause**: what went wrong
/// - **validator**: the rule that produced the failure
/// - **path**: the ancestor fields of `name`
/// - **serialization_key**: an alternate name taken from the field's `json` tag
/// - **value**: a snapshot of the offending value (optional)
///
/// By default the error renders as `path.name: cause`. When
/// `custom_message` is set the cause's message is used on its own.
///
/// # Example
///
/// ```rust
/// use validkit::{FieldError, FieldPath};
///
/// let error = FieldError::new("Age", "must be positive", "positive", Some("-3".into()))
///     .with_path(FieldPath::from_field("User"));
///
/// assert_eq!(error.to_string(), "User.Age: must be positive");
/// assert_eq!(error.validator, "positive");
/// ```
#[derive(Debug, Clone)]
pub struct FieldError {
    /// The field that failed validation.
    pub name: String,
    /// The underlying error.
    pub cause: Cause,
    /// Render `cause` verbatim instead of `name: cause`.
    pub custom_message: bool,
    /// Name of the validator that failed.
    pub validator: String,
    /// Ancestor field names, outermost first.
    pub path: FieldPath,
    /// Name from the field's `json` tag, if any.
    pub serialization_key: Option<String>,
    /// Offending value, formatted as a string.
    pub value: Option<String>,
}

impl FieldError {
    /// Creates a new field error at the root path with no serialization key.
    ///
    /// `cause` accepts any error type as well as `&str`/`String` messages.
    pub fn new(
        name: impl Into<String>,
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
        validator: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cause: Arc::from(cause.into()),
            custom_message: false,
            validator: validator.into(),
            path: FieldPath::root(),
            serialization_key: None,
            value,
        }
    }

    /// Sets the ancestor path and returns self for chaining.
    pub fn with_path(mut self, path: impl Into<FieldPath>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets whether the cause carries a user-supplied message.
    pub fn with_custom_message(mut self, custom: bool) -> Self {
        self.custom_message = custom;
        self
    }

    /// Derives the serialization key from the field's tags.
    ///
    /// Leaves the key unchanged when the `json` tag is missing or names no field.
    pub fn with_tag(mut self, tags: &FieldTags) -> Self {
        if let Some(key) = tags.serialization_key() {
            self.serialization_key = Some(key.to_string());
        }
        self
    }

    /// Sets the serialization key directly.
    pub fn with_serialization_key(mut self, key: impl Into<String>) -> Self {
        self.serialization_key = Some(key.into());
        self
    }

    /// The serialization key if present, else the field name.
    pub fn display_name(&self) -> &str {
        self.serialization_key.as_deref().unwrap_or(&self.name)
    }

    /// The field name qualified by its path (e.g. `User.Age`).
    pub fn qualified_name(&self) -> String {
        self.path.qualify(&self.name)
    }

    /// The underlying cause's message.
    pub fn message(&self) -> String {
        self.cause.to_string()
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.custom_message {
            return write!(f, "{}", self.cause);
        }
        write!(f, "{}: {}", self.qualified_name(), self.cause)
    }
}

impl StdError for FieldError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

// FieldError must stay shareable across threads; the cause is an
// Arc<dyn Error + Send + Sync> and every other field is owned.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldError>();
    assert_sync::<FieldError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagError;

    #[test]
    fn test_field_error_defaults() {
        let error = FieldError::new("Age", "must be positive", "positive", None);

        assert_eq!(error.name, "Age");
        assert_eq!(error.validator, "positive");
        assert!(!error.custom_message);
        assert!(error.path.is_root());
        assert!(error.serialization_key.is_none());
        assert!(error.value.is_none());
    }

    #[test]
    fn test_display_root() {
        let error = FieldError::new("Age", "must be positive", "positive", None);
        assert_eq!(error.to_string(), "Age: must be positive");
    }

    #[test]
    fn test_display_nested_path() {
        let error = FieldError::new("Age", "must be positive", "positive", None)
            .with_path(FieldPath::from_field("User"));
        assert_eq!(error.to_string(), "User.Age: must be positive");

        let deeper = error.with_path(FieldPath::from_iter(["Org", "Owner"]));
        assert_eq!(deeper.to_string(), "Org.Owner.Age: must be positive");
    }

    #[test]
    fn test_display_custom_message() {
        let error = FieldError::new("Email", "please enter a valid email", "email", None)
            .with_path(FieldPath::from_field("User"))
            .with_custom_message(true);
        assert_eq!(error.to_string(), "please enter a valid email");
    }

    #[test]
    fn test_display_is_idempotent() {
        let error = FieldError::new("Name", "required", "required", None);
        assert_eq!(error.to_string(), error.to_string());
    }

    #[test]
    fn test_with_tag_sets_serialization_key() {
        let tags = FieldTags::new().insert("json", "user_age,omitempty");
        let error = FieldError::new("Age", "too small", "min", Some("3".into())).with_tag(&tags);

        assert_eq!(error.serialization_key.as_deref(), Some("user_age"));
        assert_eq!(error.display_name(), "user_age");
        assert_eq!(error.value.as_deref(), Some("3"));
    }

    #[test]
    fn test_with_tag_empty_name_keeps_absent() {
        let tags = FieldTags::new().insert("json", ",omitempty");
        let error = FieldError::new("Age", "too small", "min", None).with_tag(&tags);

        assert!(error.serialization_key.is_none());
        assert_eq!(error.display_name(), "Age");
    }

    #[test]
    fn test_options_apply_in_order() {
        let error = FieldError::new("Age", "x", "v", None)
            .with_custom_message(true)
            .with_custom_message(false)
            .with_path(FieldPath::from_field("A"))
            .with_path(FieldPath::from_field("B"));

        assert!(!error.custom_message);
        assert_eq!(error.to_string(), "B.Age: x");
    }

    #[test]
    fn test_source_is_cause() {
        let cause = TagError::Malformed { position: 4 };
        let error = FieldError::new("Tag", cause.clone(), "tag", None);

        let source = error.source().unwrap();
        assert_eq!(source.to_string(), cause.to_string());
        assert!(source.downcast_ref::<TagError>().is_some());
    }
}
