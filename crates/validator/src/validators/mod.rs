//! Built-in validators
//!
//! This module provides the validators behind the public checks:
//! - Email validators ([`EmailShape`], [`DomainSuffix`])
//! - Script-membership validator ([`NoCyrillic`])
//! - Text validators ([`NotEmpty`], [`NoSpaces`])

pub mod email;
pub mod script;
pub mod text;

pub use email::{DomainSuffix, EmailShape, domain_suffix, email_shape};
pub use script::{NoCyrillic, no_cyrillic};
pub use text::{NoSpaces, NotEmpty, no_spaces, not_empty};
