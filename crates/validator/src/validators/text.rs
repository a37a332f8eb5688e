//! Text validators
//!
//! Presence and whitespace checks for plain text.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// NOT EMPTY
// ============================================================================

/// Validates that a string is not empty.
///
/// Fails with [`ErrorKind::EmptyString`](crate::foundation::ErrorKind).
/// Whitespace-only text is not empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmpty;

impl Validate for NotEmpty {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::empty_string("text must not be empty"))
        } else {
            Ok(())
        }
    }
}

/// Creates a not-empty validator.
#[must_use]
pub const fn not_empty() -> NotEmpty {
    NotEmpty
}

// ============================================================================
// NO SPACES
// ============================================================================

/// Validates that a string contains no space characters (U+0020).
///
/// Other whitespace (tabs, newlines) is accepted. Fails with
/// [`ErrorKind::Precondition`](crate::foundation::ErrorKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoSpaces;

impl Validate for NoSpaces {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.contains(' ') {
            Err(ValidationError::precondition("text must not contain spaces"))
        } else {
            Ok(())
        }
    }
}

/// Creates a no-spaces validator.
#[must_use]
pub const fn no_spaces() -> NoSpaces {
    NoSpaces
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_not_empty_valid() {
        let validator = not_empty();
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate(" ").is_ok()); // whitespace is not empty
    }

    #[test]
    fn test_not_empty_invalid() {
        let err = not_empty().validate("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyString);
        assert_eq!(err.message(), "text must not be empty");
    }

    #[test]
    fn test_no_spaces_valid() {
        let validator = no_spaces();
        assert!(validator.validate("Not_empty_at_all").is_ok());
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("tab\there").is_ok());
    }

    #[test]
    fn test_no_spaces_invalid() {
        let err = no_spaces().validate("two words").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert_eq!(err.message(), "text must not contain spaces");
    }
}
