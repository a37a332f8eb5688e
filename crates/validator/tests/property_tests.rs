//! Property-based tests for gatekeep-validator.

use gatekeep_validator::prelude::*;
use proptest::prelude::*;

fn cyrillic_char() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('а', 'я'),
        proptest::char::range('А', 'Я'),
        Just('ё'),
        Just('Ё'),
    ]
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn email_idempotent(s in ".*") {
        let r1 = validate_email(&s);
        let r2 = validate_email(&s);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn no_cyrillic_idempotent(s in ".*") {
        let r1 = validate_no_cyrillic(&s);
        let r2 = validate_no_cyrillic(&s);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn recovered_calls_repeat_their_diagnostics(s in ".{0,20}") {
        let first = BufferSink::new();
        let second = BufferSink::new();
        let r1 = safe_text_length(&s, &first);
        let r2 = safe_text_length(&s, &second);
        prop_assert_eq!(r1, r2);
        prop_assert_eq!(first.lines(), second.lines());
    }
}

// ============================================================================
// EMAIL SHAPE
// ============================================================================

proptest! {
    #[test]
    fn shaped_emails_validate(
        local in "[a-z0-9._-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{1,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert_eq!(validate_email(&email), Ok(true));
    }

    #[test]
    fn strings_without_at_sign_fail(s in "[a-z.]{0,20}") {
        let err = validate_email(&s).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidEmail);
    }
}

// ============================================================================
// CYRILLIC MEMBERSHIP
// ============================================================================

proptest! {
    #[test]
    fn any_cyrillic_character_fails(
        prefix in "[a-zA-Z0-9 ]{0,10}",
        ch in cyrillic_char(),
        suffix in "[a-zA-Z0-9 ]{0,10}",
    ) {
        let text = format!("{prefix}{ch}{suffix}");
        let err = validate_no_cyrillic(&text).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::CyrillicCharacters);
    }

    #[test]
    fn ascii_text_passes(s in "[ -~]*") {
        prop_assert_eq!(validate_no_cyrillic(&s), Ok(true));
    }
}

// ============================================================================
// SUBSTRING CLIPPING
// ============================================================================

proptest! {
    #[test]
    fn substring_never_fails(
        s in ".{0,20}",
        start in 0usize..30,
        end in 0usize..30,
    ) {
        let sink = BufferSink::new();
        let result = safe_get_substring(&s, start, end, &sink);
        prop_assert!(result.is_some());
        // One cleanup line, nothing else: clipping is not an error.
        prop_assert_eq!(sink.lines(), vec!["operation finished".to_owned()]);
    }

    #[test]
    fn substring_matches_clipped_char_range(
        s in ".{0,20}",
        start in 0usize..30,
        end in 0usize..30,
    ) {
        let sink = BufferSink::new();
        let result = safe_get_substring(&s, start, end, &sink).unwrap();

        let chars: Vec<char> = s.chars().collect();
        let hi = end.min(chars.len());
        let expected: String = if start < hi {
            chars[start..hi].iter().collect()
        } else {
            String::new()
        };
        prop_assert_eq!(result, expected);
    }
}

// ============================================================================
// LENGTH
// ============================================================================

proptest! {
    #[test]
    fn length_is_char_count_for_non_empty(s in ".{1,20}") {
        let sink = BufferSink::new();
        prop_assert_eq!(safe_text_length(&s, &sink), Some(s.chars().count()));
        prop_assert!(sink.lines().is_empty());
    }
}
