//! # gatekeep-validator
//!
//! A small, composable input-validation library with an explicit error
//! taxonomy and per-call-site recovery policies.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gatekeep_validator::prelude::*;
//!
//! // Fail-fast checks return the error to the caller.
//! assert!(validate_email("user@example.com").is_ok());
//! assert_eq!(get_upper_text("go")?, "GO");
//!
//! // Recovering checks report through a sink and return a sentinel.
//! let sink = StdoutSink;
//! assert_eq!(safe_text_length("", &sink), None);
//! ```
//!
//! ## Architecture
//!
//! Two layers:
//!
//! - **Validators** ([`validators`]) are small stateless values
//!   implementing [`Validate`](foundation::Validate), composed in order
//!   with [`ValidateExt::and`](foundation::ValidateExt::and); the
//!   first failing check wins.
//! - **Recovery** ([`recovery`]) decides what happens to a failure at
//!   each call site: a [`RecoveryPolicy`](recovery::RecoveryPolicy)
//!   declares the set of handled [`ErrorKind`](foundation::ErrorKind)s
//!   and how recovered failures are reported to a
//!   [`DiagnosticSink`](recovery::DiagnosticSink); anything outside the
//!   declared set propagates unmodified.
//!
//! The public routines in [`checks`] wire the two layers together. Their
//! signatures encode the policy: a routine that recovers from every kind
//! returns a bare `Option<T>`, one that handles a closed set returns
//! `Result<Option<T>, ValidationError>`, and the fail-fast utilities
//! return plain `Result<T, ValidationError>`.

pub mod checks;
pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod recovery;
pub mod validators;
