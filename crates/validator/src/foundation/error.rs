//! Error types for validation failures
//!
//! The taxonomy is a closed tagged union of four kinds. Every error
//! carries exactly one kind and one non-empty human-readable message.
//! Messages use `Cow<'static, str>` for zero-allocation in the common
//! case of static message text.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR KIND
// ============================================================================

/// Tag distinguishing why a validation failed.
///
/// Distinct from the message text: recovery scopes are declared as sets
/// of kinds, and per-kind diagnostics dispatch on the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The string does not have the expected email shape, or lacks a
    /// required domain suffix.
    InvalidEmail,
    /// The string contains at least one Cyrillic character.
    CyrillicCharacters,
    /// The string is empty where non-empty text is required.
    EmptyString,
    /// An out-of-domain argument not covered by the kinds above
    /// (missing character, forbidden spaces).
    Precondition,
}

impl ErrorKind {
    /// Short prefix used in per-kind recovery diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidEmail => "email error",
            Self::CyrillicCharacters => "cyrillic error",
            Self::EmptyString => "empty string error",
            Self::Precondition => "precondition error",
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A validation failure: one kind, one message.
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::empty_string("text must not be empty");
/// assert_eq!(error.kind(), ErrorKind::EmptyString);
/// assert_eq!(error.message(), "text must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationError {
    /// Email shape or domain-suffix violation.
    #[error("{message}")]
    InvalidEmail {
        /// Human-readable description of the failure.
        message: Cow<'static, str>,
    },

    /// Cyrillic characters present where only Latin text is accepted.
    #[error("{message}")]
    CyrillicCharacters {
        /// Human-readable description of the failure.
        message: Cow<'static, str>,
    },

    /// Empty input where non-empty text is required.
    #[error("{message}")]
    EmptyString {
        /// Human-readable description of the failure.
        message: Cow<'static, str>,
    },

    /// Generic precondition violation on an argument.
    #[error("{message}")]
    Precondition {
        /// Human-readable description of the failure.
        message: Cow<'static, str>,
    },
}

impl ValidationError {
    /// Creates an [`ErrorKind::InvalidEmail`] error.
    pub fn invalid_email(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidEmail {
            message: message.into(),
        }
    }

    /// Creates an [`ErrorKind::CyrillicCharacters`] error.
    pub fn cyrillic(message: impl Into<Cow<'static, str>>) -> Self {
        Self::CyrillicCharacters {
            message: message.into(),
        }
    }

    /// Creates an [`ErrorKind::EmptyString`] error.
    pub fn empty_string(message: impl Into<Cow<'static, str>>) -> Self {
        Self::EmptyString {
            message: message.into(),
        }
    }

    /// Creates an [`ErrorKind::Precondition`] error.
    pub fn precondition(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Returns the kind tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail { .. } => ErrorKind::InvalidEmail,
            Self::CyrillicCharacters { .. } => ErrorKind::CyrillicCharacters,
            Self::EmptyString { .. } => ErrorKind::EmptyString,
            Self::Precondition { .. } => ErrorKind::Precondition,
        }
    }

    /// Returns the message text of this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidEmail { message }
            | Self::CyrillicCharacters { message }
            | Self::EmptyString { message }
            | Self::Precondition { message } => message,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(
            ValidationError::invalid_email("bad").kind(),
            ErrorKind::InvalidEmail
        );
        assert_eq!(
            ValidationError::cyrillic("bad").kind(),
            ErrorKind::CyrillicCharacters
        );
        assert_eq!(
            ValidationError::empty_string("bad").kind(),
            ErrorKind::EmptyString
        );
        assert_eq!(
            ValidationError::precondition("bad").kind(),
            ErrorKind::Precondition
        );
    }

    #[test]
    fn test_display_is_the_message() {
        let error = ValidationError::invalid_email("invalid email format");
        assert_eq!(error.to_string(), "invalid email format");
        assert_eq!(error.to_string(), error.message());
    }

    #[test]
    fn test_zero_alloc_static_messages() {
        let error = ValidationError::empty_string("text must not be empty");
        match error {
            ValidationError::EmptyString { message } => {
                assert!(matches!(message, Cow::Borrowed(_)));
            }
            _ => panic!("expected EmptyString"),
        }
    }

    #[test]
    fn test_dynamic_messages() {
        let error = ValidationError::precondition(format!("character '{}' not found", 'z'));
        match error {
            ValidationError::Precondition { message } => {
                assert!(matches!(message, Cow::Owned(_)));
            }
            _ => panic!("expected Precondition"),
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let error = ValidationError::cyrillic("text contains cyrillic characters");
        let json = serde_json::to_string(&error).unwrap();
        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), error.kind());
        assert_eq!(back.message(), error.message());
    }

    #[test]
    fn test_labels_are_distinct() {
        let kinds = [
            ErrorKind::InvalidEmail,
            ErrorKind::CyrillicCharacters,
            ErrorKind::EmptyString,
            ErrorKind::Precondition,
        ];
        for a in kinds {
            for b in kinds {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
