//! AND combinator - ordered conjunction of validators
//!
//! This module provides the [`And`] combinator which runs two
//! validators in order. The first failing validator wins: its error is
//! returned unmodified and the second validator is not evaluated.
//!
//! # Examples
//!
//! ```rust,ignore
//! use gatekeep_validator::combinators::And;
//! use gatekeep_validator::foundation::Validate;
//!
//! let validator = And::new(not_empty(), no_cyrillic());
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("").is_err()); // fails not_empty
//! ```

use crate::foundation::{Validate, ValidationError};

/// Runs two validators in order; both must pass.
///
/// Errors are returned from the first failing validator, unmodified in
/// kind and message. The second validator is only evaluated if the
/// first one passed.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

impl<L, R> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator onto the sequence.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use gatekeep_validator::foundation::ValidateExt;
    ///
    /// let validator = not_empty().and(no_spaces()).and(no_cyrillic());
    /// ```
    pub fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        And::new(self, other)
    }
}

/// Creates an `And` combinator from two validators.
pub const fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
