//! The public validation routines
//!
//! Each routine wires validators from [`crate::validators`] to a
//! recovery decision from [`crate::recovery`]. The signature tells the
//! policy:
//!
//! - broad recovery (every kind handled) returns a bare `Option<T>`;
//!   the routine never returns an error,
//! - closed-union recovery returns [`ValidationResult`]`<Option<T>>`;
//!   `Ok(None)` means a handled kind was recovered, `Err` means a kind
//!   outside the union propagated,
//! - fail-fast returns [`ValidationResult`]`<T>`; recovery is the
//!   caller's responsibility.
//!
//! Routines that recover or clean up take a
//! [`DiagnosticSink`](crate::recovery::DiagnosticSink) and emit
//! human-readable lines through it; the sink is the only side effect.

use crate::foundation::{ErrorKind, Validate, ValidateExt, ValidationError, ValidationResult};
use crate::recovery::{CleanupGuard, DiagnosticSink, RecoveryPolicy, recover};
use crate::validators::{domain_suffix, email_shape, no_cyrillic, no_spaces, not_empty};

/// Kinds recovered by [`validate_email_and_cyrillic`].
const EMAIL_AND_CYRILLIC: &[ErrorKind] =
    &[ErrorKind::InvalidEmail, ErrorKind::CyrillicCharacters];

/// Kinds recovered by [`validate_non_empty_text`].
const NON_EMPTY_TEXT: &[ErrorKind] = &[ErrorKind::EmptyString, ErrorKind::Precondition];

/// Kinds recovered by [`validate_text_content`].
const TEXT_CONTENT: &[ErrorKind] = &[
    ErrorKind::InvalidEmail,
    ErrorKind::EmptyString,
    ErrorKind::CyrillicCharacters,
];

/// Union recovered by [`validate_non_empty_no_cyrillic`].
const NON_EMPTY_NO_CYRILLIC: &[ErrorKind] =
    &[ErrorKind::EmptyString, ErrorKind::CyrillicCharacters];

// ============================================================================
// FAIL-FAST CHECKS
// ============================================================================

/// Validates that `email` has the `local@domain.tld` shape.
///
/// Returns `Ok(true)` on success and
/// [`ErrorKind::InvalidEmail`] otherwise. No local recovery.
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::checks::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("plain").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<bool> {
    email_shape().validate(email)?;
    Ok(true)
}

/// Validates that `text` contains no Cyrillic characters.
///
/// Returns `Ok(true)` on success and
/// [`ErrorKind::CyrillicCharacters`] otherwise. No local recovery.
pub fn validate_no_cyrillic(text: &str) -> ValidationResult<bool> {
    no_cyrillic().validate(text)?;
    Ok(true)
}

/// Uppercases `text`, requiring it to be non-empty.
///
/// Fails with [`ErrorKind::EmptyString`]; the error is the caller's
/// responsibility.
pub fn get_upper_text(text: &str) -> ValidationResult<String> {
    not_empty().validate(text)?;
    Ok(text.to_uppercase())
}

/// Finds the position of `ch` in `text`.
///
/// The position counts characters, not bytes. Fails with
/// [`ErrorKind::Precondition`] when the character is absent; the error
/// is the caller's responsibility.
pub fn find_character(text: &str, ch: char) -> ValidationResult<usize> {
    text.chars().position(|c| c == ch).ok_or_else(|| {
        ValidationError::precondition(format!("character '{ch}' not found"))
    })
}

/// Validates that `email` ends with the required `domain` suffix.
///
/// Returns `Ok(true)` on success and
/// [`ErrorKind::InvalidEmail`] otherwise. No local recovery.
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::checks::check_email_domain;
///
/// assert!(check_email_domain("a@mail.com", "@mail.com").is_ok());
/// assert!(check_email_domain("a@other.com", "@mail.com").is_err());
/// ```
pub fn check_email_domain(email: &str, domain: &str) -> ValidationResult<bool> {
    domain_suffix(domain).validate(email)?;
    Ok(true)
}

// ============================================================================
// BROAD RECOVERY
// ============================================================================

/// Returns the length of `text` in characters, or `None` for empty
/// input.
///
/// Internally raises [`ErrorKind::EmptyString`] for `""`, but the call
/// site recovers from *every* kind, not just that one: the scope is
/// deliberately over-broad. A recovered failure emits one generic
/// `error: <message>` line to `sink` and yields the `None` sentinel.
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::prelude::*;
///
/// let sink = BufferSink::new();
/// assert_eq!(safe_text_length("abc", &sink), Some(3));
/// assert_eq!(safe_text_length("", &sink), None);
/// ```
pub fn safe_text_length(text: &str, sink: &dyn DiagnosticSink) -> Option<usize> {
    let checked = not_empty()
        .validate(text)
        .map(|()| text.chars().count());
    // `Handled::All` covers every kind, so this can never propagate.
    recover(checked, RecoveryPolicy::broad(), sink).unwrap_or_default()
}

/// Returns the character slice `[start, end)` of `text`, clipped to the
/// valid range.
///
/// Out-of-range indices clip instead of failing: `end` past the end of
/// the text is shortened, and `start` past the end or an inverted range
/// yields `""`. Should the underlying operation ever fail, the call
/// site recovers from every kind. The cleanup line
/// `operation finished` is emitted on every exit path.
pub fn safe_get_substring(
    text: &str,
    start: usize,
    end: usize,
    sink: &dyn DiagnosticSink,
) -> Option<String> {
    let _finished = CleanupGuard::new(sink, "operation finished");
    // `Handled::All` covers every kind, so this can never propagate.
    recover(clipped_substring(text, start, end), RecoveryPolicy::broad(), sink)
        .unwrap_or_default()
}

/// Character-indexed substring with permissive clipping.
fn clipped_substring(text: &str, start: usize, end: usize) -> ValidationResult<String> {
    let clipped = text
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();
    Ok(clipped)
}

// ============================================================================
// PER-KIND RECOVERY
// ============================================================================

/// Checks `email` for shape, then `text` for Cyrillic characters.
///
/// The first failing check wins. Recovery handles
/// `{InvalidEmail, CyrillicCharacters}` with a kind-specific diagnostic
/// per branch; the cleanup line `check finished` is emitted on every
/// exit path. Success is `Ok(Some(true))`, a recovered failure
/// `Ok(None)`.
pub fn validate_email_and_cyrillic(
    email: &str,
    text: &str,
    sink: &dyn DiagnosticSink,
) -> ValidationResult<Option<bool>> {
    let _finished = CleanupGuard::new(sink, "check finished");
    let checked = email_shape()
        .validate(email)
        .and_then(|()| no_cyrillic().validate(text))
        .map(|()| true);
    recover(checked, RecoveryPolicy::per_kind(EMAIL_AND_CYRILLIC), sink)
}

/// Checks `text` for emptiness, then for spaces.
///
/// Recovery handles `{EmptyString, Precondition}` per kind; cleanup
/// line `check finished`. Success returns the owned text.
pub fn validate_non_empty_text(
    text: &str,
    sink: &dyn DiagnosticSink,
) -> ValidationResult<Option<String>> {
    let _finished = CleanupGuard::new(sink, "check finished");
    let checked = not_empty()
        .and(no_spaces())
        .validate(text)
        .map(|()| text.to_owned());
    recover(checked, RecoveryPolicy::per_kind(NON_EMPTY_TEXT), sink)
}

/// Checks `email` for shape, then `text` for emptiness and Cyrillic
/// characters, in that order.
///
/// Recovery handles all three kinds per kind; cleanup line
/// `validation finished`.
pub fn validate_text_content(
    email: &str,
    text: &str,
    sink: &dyn DiagnosticSink,
) -> ValidationResult<Option<()>> {
    let _finished = CleanupGuard::new(sink, "validation finished");
    let checked = email_shape()
        .validate(email)
        .and_then(|()| not_empty().and(no_cyrillic()).validate(text));
    recover(checked, RecoveryPolicy::per_kind(TEXT_CONTENT), sink)
}

// ============================================================================
// CLOSED-UNION RECOVERY
// ============================================================================

/// Checks `text` for emptiness, then for Cyrillic characters, with one
/// shared handler for the two kinds.
///
/// The handler covers exactly the union
/// `{EmptyString, CyrillicCharacters}` under the fixed label
/// `validation error`; any other kind propagates uncaught. Cleanup line
/// `string validation finished` on every exit path, including
/// propagation.
pub fn validate_non_empty_no_cyrillic(
    text: &str,
    sink: &dyn DiagnosticSink,
) -> ValidationResult<Option<()>> {
    let _finished = CleanupGuard::new(sink, "string validation finished");
    let checked = not_empty().and(no_cyrillic()).validate(text);
    recover(
        checked,
        RecoveryPolicy::shared(NON_EMPTY_NO_CYRILLIC, "validation error"),
        sink,
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recovery::BufferSink;

    // Contract-level coverage lives in tests/checks_test.rs; these
    // pin the pieces that are easy to get subtly wrong.

    #[test]
    fn test_length_counts_characters() {
        let sink = BufferSink::new();
        assert_eq!(safe_text_length("abc", &sink), Some(3));
        assert_eq!(safe_text_length("\u{43f}\u{440}\u{438}\u{432}\u{435}\u{442}", &sink), Some(6));
    }

    #[test]
    fn test_substring_clipping() {
        let sink = BufferSink::new();
        assert_eq!(
            safe_get_substring("abcdef", 1, 3, &sink),
            Some("bc".to_owned())
        );
        assert_eq!(
            safe_get_substring("abc", 1, 100, &sink),
            Some("bc".to_owned())
        );
        assert_eq!(safe_get_substring("abc", 10, 20, &sink), Some(String::new()));
        assert_eq!(safe_get_substring("abc", 2, 1, &sink), Some(String::new()));
    }

    #[test]
    fn test_substring_indexes_characters_not_bytes() {
        let sink = BufferSink::new();
        // "Самый" is five characters but ten bytes.
        assert_eq!(
            safe_get_substring("Самый крутой", 0, 5, &sink),
            Some("Самый".to_owned())
        );
    }

    #[test]
    fn test_find_character_position_not_offset() {
        // 'v' sits at byte offset 3 but character position 2.
        assert_eq!(find_character("d\u{fc}v", 'v'), Ok(2));
    }

    #[test]
    fn test_checks_are_ordered() {
        // The emptiness check runs before the spaces check.
        let sink = BufferSink::new();
        let result = validate_non_empty_text("", &sink).unwrap();
        assert_eq!(result, None);
        assert_eq!(
            sink.lines(),
            vec!["empty string error: text must not be empty", "check finished"]
        );
    }
}
