//! Script-membership validator
//!
//! Rejects text containing Cyrillic characters.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

// Lowercase а-я (U+0430..U+044F), uppercase А-Я (U+0410..U+042F), plus
// ё (U+0451) and Ё (U+0401), which sit outside the contiguous block.
static CYRILLIC: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"[а-яА-ЯёЁ]").unwrap());

// ============================================================================
// NO CYRILLIC
// ============================================================================

/// Validates that a string contains no Cyrillic characters.
///
/// The check is a search: a single Cyrillic character anywhere in the
/// input fails it with
/// [`ErrorKind::CyrillicCharacters`](crate::foundation::ErrorKind).
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::prelude::*;
///
/// assert!(no_cyrillic().validate("My4thLab").is_ok());
/// assert!(no_cyrillic().validate("привет").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoCyrillic;

impl Validate for NoCyrillic {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if CYRILLIC.is_match(input) {
            Err(ValidationError::cyrillic(
                "text contains cyrillic characters",
            ))
        } else {
            Ok(())
        }
    }
}

/// Creates a no-Cyrillic validator.
#[must_use]
pub const fn no_cyrillic() -> NoCyrillic {
    NoCyrillic
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn test_latin_passes() {
        let validator = no_cyrillic();
        assert!(validator.validate("My4thLab").is_ok());
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("punctuation, too!").is_ok());
    }

    #[test]
    fn test_cyrillic_fails() {
        let validator = no_cyrillic();
        assert!(validator.validate("привет").is_err());
        assert!(validator.validate("ПРИВЕТ").is_err());
        assert!(validator.validate("latin с cyrillic").is_err());
    }

    #[test]
    fn test_yo_outside_contiguous_block() {
        let validator = no_cyrillic();
        assert!(validator.validate("ёж").is_err());
        assert!(validator.validate("Ёлка").is_err());
    }

    #[test]
    fn test_other_non_latin_scripts_pass() {
        // Only Cyrillic is rejected; the check is not a Latin-only filter.
        let validator = no_cyrillic();
        assert!(validator.validate("caf\u{e9}").is_ok());
        assert!(validator.validate("\u{4f60}\u{597d}").is_ok());
    }

    #[test]
    fn test_error_kind() {
        let err = no_cyrillic().validate("ё").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CyrillicCharacters);
        assert_eq!(err.message(), "text contains cyrillic characters");
    }
}
