//! Error types for validation failures.
//!
//! This module provides [`FieldError`], a single failure with its field name,
//! path, validator and cause, and [`ErrorList`], an aggregate that is itself
//! an error.

mod error_list;
mod field_error;

pub use error_list::{ErrorEntry, ErrorList};
pub use field_error::{Cause, FieldError};
