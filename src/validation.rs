//! Bridges [`ErrorList`] into stillwater's accumulating `Validation`.
//!
//! A validation engine usually checks many fields and wants every failure,
//! not just the first. [`accumulate`] runs through all per-field results and
//! gathers the failures into one [`ErrorList`].

use stillwater::Validation;

use crate::error::{ErrorList, FieldError};

/// Validation outcome whose failure side is an [`ErrorList`].
pub type ValidationResult<T> = Validation<T, ErrorList>;

/// Collects per-field results, keeping every failure.
///
/// Returns `Success` with all values in order when nothing failed, otherwise
/// `Failure` with every error in order.
///
/// # Example
///
/// ```rust
/// use validkit::{validation, FieldError};
///
/// let checks = vec![
///     Ok(1),
///     Err(FieldError::new("Name", "required", "required", None)),
///     Err(FieldError::new("Age", "must be positive", "positive", None)),
/// ];
///
/// let result = validation::accumulate(checks);
/// assert!(result.is_failure());
/// ```
pub fn accumulate<T, I>(results: I) -> ValidationResult<Vec<T>>
where
    I: IntoIterator<Item = Result<T, FieldError>>,
{
    let mut values = Vec::new();
    let mut errors = ErrorList::new();

    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }

    errors.into_validation(values)
}

impl ErrorList {
    /// Returns `Success(value)` when empty, otherwise `Failure(self)`.
    pub fn into_validation<T>(self, value: T) -> ValidationResult<T> {
        if self.is_empty() {
            Validation::Success(value)
        } else {
            Validation::Failure(self)
        }
    }
}
