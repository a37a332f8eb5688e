//! Error recovery
//!
//! What happens to a validation failure is a per-call-site decision,
//! and this module makes that decision explicit:
//!
//! - [`RecoveryPolicy`] declares the set of handled
//!   [`ErrorKind`](crate::foundation::ErrorKind)s (possibly all) and
//!   the diagnostic style for recovered failures.
//! - [`recover`] applies a policy: covered failures become a diagnostic
//!   line plus a `None` sentinel; uncovered failures propagate
//!   unmodified.
//! - [`CleanupGuard`] emits a fixed line on drop, guaranteeing cleanup
//!   on every exit path including propagation.
//! - [`DiagnosticSink`] is the pluggable destination for all emitted
//!   lines.

pub mod cleanup;
pub mod policy;
pub mod sink;

pub use cleanup::CleanupGuard;
pub use policy::{Diagnostic, Handled, RecoveryPolicy, recover};
pub use sink::{BufferSink, DiagnosticSink, StdoutSink, TracingSink};
