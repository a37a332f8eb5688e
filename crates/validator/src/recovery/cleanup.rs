//! Guaranteed cleanup
//!
//! [`CleanupGuard`] emits a fixed diagnostic line when dropped. Drop
//! runs on every exit path of the enclosing scope (normal return,
//! recovered failure, and error propagation via `?`), so the line
//! appears exactly once per call, after any diagnostics emitted inside
//! the scope.

use crate::recovery::sink::DiagnosticSink;

/// Emits one diagnostic line on drop.
///
/// # Examples
///
/// ```rust,ignore
/// use gatekeep_validator::recovery::{CleanupGuard, StdoutSink};
///
/// fn checked(sink: &StdoutSink) -> Result<(), gatekeep_validator::foundation::ValidationError> {
///     let _finished = CleanupGuard::new(sink, "operation finished");
///     fallible_step()?; // "operation finished" still prints on Err
///     Ok(())
/// }
/// ```
pub struct CleanupGuard<'a> {
    sink: &'a dyn DiagnosticSink,
    line: &'static str,
}

impl<'a> CleanupGuard<'a> {
    /// Arms a guard that will emit `line` to `sink` when dropped.
    #[must_use]
    pub fn new(sink: &'a dyn DiagnosticSink, line: &'static str) -> Self {
        Self { sink, line }
    }
}

impl Drop for CleanupGuard<'_> {
    fn drop(&mut self) {
        self.sink.emit(self.line);
    }
}

impl std::fmt::Debug for CleanupGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanupGuard")
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidationError, ValidationResult};
    use crate::recovery::sink::BufferSink;

    #[test]
    fn test_guard_fires_on_normal_exit() {
        let sink = BufferSink::new();
        {
            let _finished = CleanupGuard::new(&sink, "operation finished");
        }
        assert_eq!(sink.lines(), vec!["operation finished"]);
    }

    #[test]
    fn test_guard_fires_after_inner_diagnostics() {
        let sink = BufferSink::new();
        {
            let _finished = CleanupGuard::new(&sink, "operation finished");
            sink.emit("error: something failed");
        }
        assert_eq!(
            sink.lines(),
            vec!["error: something failed", "operation finished"]
        );
    }

    #[test]
    fn test_guard_fires_on_error_propagation() {
        fn failing(sink: &BufferSink) -> ValidationResult<()> {
            let _finished = CleanupGuard::new(sink, "operation finished");
            let step: ValidationResult<()> = Err(ValidationError::precondition("boom"));
            step?;
            Ok(())
        }

        let sink = BufferSink::new();
        assert!(failing(&sink).is_err());
        assert_eq!(sink.lines(), vec!["operation finished"]);
    }
}
