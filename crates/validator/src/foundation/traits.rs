//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must
//! implement.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::foundation::{Validate, ValidationError};
///
/// struct NotEmpty;
///
/// impl Validate for NotEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::empty_string("text must not be empty"))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::prelude::*;
///
/// let validator = not_empty().and(no_cyrillic());
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Chains a second validator to run after this one.
    ///
    /// Checks run in order; the first failing check wins and later
    /// checks are not evaluated.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use gatekeep_validator::prelude::*;
    ///
    /// let validator = not_empty().and(no_spaces());
    /// assert!(validator.validate("ok").is_ok());
    /// assert!(validator.validate("").is_err()); // fails not_empty
    /// assert!(validator.validate("a b").is_err()); // fails no_spaces
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::And;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        let validator = AlwaysValid;
        assert!(validator.validate("test").is_ok());
    }

    #[test]
    fn test_ext_is_blanket_implemented() {
        let validator = AlwaysValid.and(AlwaysValid);
        assert!(validator.validate("test").is_ok());
    }
}
