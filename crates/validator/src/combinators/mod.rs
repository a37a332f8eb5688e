//! Validator combinators
//!
//! Composition of validators. The only combinator is [`And`]: the
//! checks in this crate are short ordered sequences where the first
//! failing check wins, and `And` is exactly that sequencing.

pub mod and;

pub use and::{And, and};
