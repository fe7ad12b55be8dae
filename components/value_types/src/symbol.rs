//! Symbol primitive type.
//!
//! Symbols are unique, immutable primitive values. Each symbol carries a
//! unique internal ID and an optional description for debugging; two
//! symbols are equal only if they are the same symbol, never because their
//! descriptions match.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A symbol value: a unique, immutable identifier.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    /// Unique identifier for this symbol
    id: u64,
    /// Optional description for debugging
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with optional description
    pub fn new(description: Option<&str>) -> Self {
        SymbolValue {
            id: SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed),
            description: description.map(String::from),
        }
    }

    /// Get the symbol's description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
