//! Errors surfaced while constructing values.
//!
//! Classification itself is total and never fails; the only fallible
//! operation in this crate is compiling a regular expression pattern into
//! a RegExp value.

use thiserror::Error;

/// Error raised by a fallible value constructor.
#[derive(Debug, Clone, Error)]
pub enum ValueError {
    /// The pattern handed to [`Value::regexp`](crate::Value::regexp) did
    /// not compile.
    #[error("invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}
