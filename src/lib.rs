//! # Validkit
//!
//! Plumbing for validation engines: generic slice helpers and structured
//! error types that report every failure at once.
//!
//! ## Overview
//!
//! - [`seq`]: `some`, `every`, `reduce`, `each`, `map`, `find`, `filter` and
//!   `count` over any slice, with callbacks that receive the element and its
//!   index. `some` and `every` always visit every element.
//! - [`FieldError`]: a single failure with field name, cause, validator,
//!   ancestor path and optional serialization key.
//! - [`ErrorList`]: an ordered collection of failures that is itself an error
//!   and renders as one sorted, `;`-joined message.
//! - [`FieldTags`]: field annotations used to derive serialization keys.
//!
//! ## Example
//!
//! ```rust
//! use validkit::{seq, ErrorList, FieldError, FieldPath, FieldTags};
//!
//! let ages = [34, -2, 17, -9];
//!
//! let mut errors = ErrorList::new();
//! seq::each(&ages, |age, index| {
//!     if *age < 0 {
//!         let tags = FieldTags::new().insert("json", "age,omitempty");
//!         errors.push(
//!             FieldError::new("Age", "must be positive", "positive", Some(age.to_string()))
//!                 .with_path(FieldPath::from_field(format!("Users{}", index)))
//!                 .with_tag(&tags),
//!         );
//!     }
//! });
//!
//! assert_eq!(
//!     errors.to_string(),
//!     "Users1.Age: must be positive;Users3.Age: must be positive"
//! );
//! ```

pub mod error;
pub mod path;
pub mod seq;
pub mod tag;
pub mod validation;

pub use error::{Cause, ErrorEntry, ErrorList, FieldError};
pub use path::FieldPath;
pub use tag::{FieldTags, TagError};
pub use validation::ValidationResult;
