//! Diagnostic sinks
//!
//! Recovered failures and cleanup steps report through a
//! [`DiagnosticSink`] rather than printing directly, so embedders pick
//! the destination and tests assert on exact emitted sequences.

use std::sync::{Mutex, MutexGuard, PoisonError};

// ============================================================================
// SINK TRAIT
// ============================================================================

/// Destination for human-readable diagnostic lines.
///
/// Implementations must be cheap to call; one line per recovered
/// failure or cleanup step.
pub trait DiagnosticSink {
    /// Emits a single diagnostic line.
    fn emit(&self, line: &str);
}

// ============================================================================
// STDOUT SINK
// ============================================================================

/// Writes each diagnostic line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

// ============================================================================
// TRACING SINK
// ============================================================================

/// Forwards diagnostic lines to [`tracing`] at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "gatekeep", "{line}");
    }
}

// ============================================================================
// BUFFER SINK
// ============================================================================

/// Captures diagnostic lines in memory.
///
/// Used by tests to assert on the exact sequence of emitted lines;
/// also useful for embedders that surface diagnostics elsewhere.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    /// Creates an empty buffer sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the captured lines, in emission order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// Clears the captured lines.
    pub fn clear(&self) {
        self.buffer().clear();
    }

    // A poisoned buffer still holds valid lines; keep collecting.
    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for BufferSink {
    fn emit(&self, line: &str) {
        self.buffer().push(line.to_owned());
    }
}

// ============================================================================
// TESTS
// ============================================================================
