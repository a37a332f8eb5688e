//! Email validators
//!
//! Shape and domain-suffix checks for email-like strings.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

// The shape is `local@domain.tld`: one-or-more non-`@` characters, `@`,
// one-or-more non-`@` characters, `.`, one-or-more non-`@` characters.
// Anchored at the start only: trailing text after the shape is
// tolerated, and a stricter RFC-grade pattern is out of contract.
static EMAIL_SHAPE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap());

// ============================================================================
// EMAIL SHAPE
// ============================================================================

/// Validates that a string has the `local@domain.tld` shape.
///
/// Fails with [`ErrorKind::InvalidEmail`](crate::foundation::ErrorKind).
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::prelude::*;
///
/// assert!(email_shape().validate("user@example.com").is_ok());
/// assert!(email_shape().validate("plain").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmailShape;

impl Validate for EmailShape {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if EMAIL_SHAPE.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_email("invalid email format"))
        }
    }
}

/// Creates an email shape validator.
#[must_use]
pub const fn email_shape() -> EmailShape {
    EmailShape
}

// ============================================================================
// DOMAIN SUFFIX
// ============================================================================

/// Validates that an email ends with a required domain suffix.
///
/// Fails with [`ErrorKind::InvalidEmail`](crate::foundation::ErrorKind).
/// The suffix is matched literally, e.g. `"@mail.com"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainSuffix {
    /// The required suffix, including the `@` if one is expected.
    pub suffix: String,
}

impl DomainSuffix {
    /// Creates a new domain suffix validator.
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Validate for DomainSuffix {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.ends_with(&self.suffix) {
            Ok(())
        } else {
            Err(ValidationError::invalid_email(format!(
                "email must end with '{}'",
                self.suffix
            )))
        }
    }
}

/// Creates a domain suffix validator.
#[must_use]
pub fn domain_suffix(suffix: impl Into<String>) -> DomainSuffix {
    DomainSuffix::new(suffix)
}

// ============================================================================
// TESTS
// ============================================================================
