//! Prelude module for convenient imports.
//!
//! Provides a single `use gatekeep_validator::prelude::*;` import that
//! brings in the traits, the error taxonomy, the validators, the
//! recovery machinery, and the public checks.
//!
//! # Examples
//!
//! ```rust,ignore
//! use gatekeep_validator::prelude::*;
//!
//! let sink = BufferSink::new();
//! assert_eq!(safe_text_length("abc", &sink), Some(3));
//! assert!(validate_email("user@example.com").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    ErrorKind, Validate, ValidateExt, ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    DomainSuffix, EmailShape, NoCyrillic, NoSpaces, NotEmpty, domain_suffix, email_shape,
    no_cyrillic, no_spaces, not_empty,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, and};

// ============================================================================
// RECOVERY
// ============================================================================

pub use crate::recovery::{
    BufferSink, CleanupGuard, Diagnostic, DiagnosticSink, Handled, RecoveryPolicy, StdoutSink,
    TracingSink, recover,
};

// ============================================================================
// CHECKS
// ============================================================================

pub use crate::checks::{
    check_email_domain, find_character, get_upper_text, safe_get_substring, safe_text_length,
    validate_email, validate_email_and_cyrillic, validate_no_cyrillic,
    validate_non_empty_no_cyrillic, validate_non_empty_text, validate_text_content,
};
