//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the
//! validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ErrorKind`], [`ValidationError`]
//!
//! The error side is a closed tagged union: exactly one kind per error,
//! exactly one message, nothing else. Callers branch on
//! [`ValidationError::kind`] and read [`ValidationError::message`];
//! there is no polymorphic behavior behind the variants.

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ValidationError};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
