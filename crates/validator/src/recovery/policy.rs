//! Recovery policies
//!
//! A [`RecoveryPolicy`] is a declared value attached to a call site:
//! which error kinds the site handles locally, and how a handled
//! failure is reported. Kinds outside the declared set always
//! propagate, unmodified in kind and message.

use crate::foundation::{ErrorKind, ValidationError, ValidationResult};
use crate::recovery::sink::DiagnosticSink;

// ============================================================================
// HANDLED SET
// ============================================================================

/// The set of error kinds a call site recovers from locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Recover from every kind. Propagation is impossible under this
    /// scope.
    All,
    /// Recover only from the listed kinds; anything else propagates.
    Only(&'static [ErrorKind]),
}

impl Handled {
    /// Returns true if this scope covers the given kind.
    #[must_use]
    pub fn covers(self, kind: ErrorKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(kinds) => kinds.contains(&kind),
        }
    }
}

// ============================================================================
// DIAGNOSTIC STYLE
// ============================================================================

/// How a recovered failure is reported to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// `error: <message>`; the handler does not inspect the kind.
    Generic,
    /// `<kind label>: <message>`, one branch per kind.
    PerKind,
    /// `<label>: <message>` with a fixed label shared by every kind in
    /// the handled set.
    Shared(&'static str),
}

// ============================================================================
// RECOVERY POLICY
// ============================================================================

/// A recovery scope plus a diagnostic style.
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::foundation::ErrorKind;
/// use gatekeep_validator::recovery::RecoveryPolicy;
///
/// // Catch everything, report generically.
/// let broad = RecoveryPolicy::broad();
///
/// // Catch a closed union, one diagnostic branch per kind.
/// let narrow = RecoveryPolicy::per_kind(&[
///     ErrorKind::InvalidEmail,
///     ErrorKind::CyrillicCharacters,
/// ]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryPolicy {
    /// The kinds handled at this call site.
    pub handled: Handled,
    /// How handled failures are reported.
    pub diagnostic: Diagnostic,
}

impl RecoveryPolicy {
    /// Recovers from every kind with a generic diagnostic.
    ///
    /// The deliberately over-broad scope: the diagnostic does not name
    /// the kind because the handler never looks at it.
    #[must_use]
    pub const fn broad() -> Self {
        Self {
            handled: Handled::All,
            diagnostic: Diagnostic::Generic,
        }
    }

    /// Recovers from a closed set of kinds with a kind-specific
    /// diagnostic per branch.
    #[must_use]
    pub const fn per_kind(kinds: &'static [ErrorKind]) -> Self {
        Self {
            handled: Handled::Only(kinds),
            diagnostic: Diagnostic::PerKind,
        }
    }

    /// Recovers from a closed set of kinds with one shared diagnostic
    /// label.
    #[must_use]
    pub const fn shared(kinds: &'static [ErrorKind], label: &'static str) -> Self {
        Self {
            handled: Handled::Only(kinds),
            diagnostic: Diagnostic::Shared(label),
        }
    }
}

// ============================================================================
// RECOVER
// ============================================================================

/// Applies a recovery policy to a validation outcome.
///
/// - `Ok(value)` passes through as `Ok(Some(value))`.
/// - A covered failure emits exactly one diagnostic line and becomes
///   the `Ok(None)` sentinel.
/// - An uncovered failure propagates unmodified and emits nothing.
pub fn recover<T>(
    result: ValidationResult<T>,
    policy: RecoveryPolicy,
    sink: &dyn DiagnosticSink,
) -> ValidationResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if policy.handled.covers(error.kind()) => {
            sink.emit(&diagnostic_line(&error, policy.diagnostic));
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

fn diagnostic_line(error: &ValidationError, diagnostic: Diagnostic) -> String {
    match diagnostic {
        Diagnostic::Generic => format!("error: {error}"),
        Diagnostic::PerKind => format!("{}: {error}", error.kind().label()),
        Diagnostic::Shared(label) => format!("{label}: {error}"),
    }
}

// ============================================================================
// TESTS
// ============================================================================
