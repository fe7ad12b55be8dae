//! Unit tests for SymbolValue

use value_types::SymbolValue;

#[test]
fn test_symbol_identity() {
    let a = SymbolValue::new(Some("id"));
    let b = SymbolValue::new(Some("id"));
    // Same description, different symbols.
    assert_ne!(a, b);
    // A clone is the same symbol.
    assert_eq!(a, a.clone());
}

#[test]
fn test_symbol_description() {
    assert_eq!(SymbolValue::new(Some("desc")).description(), Some("desc"));
    assert_eq!(SymbolValue::new(None).description(), None);
}

#[test]
fn test_symbol_display() {
    assert_eq!(SymbolValue::new(Some("iterator")).to_string(), "Symbol(iterator)");
    assert_eq!(SymbolValue::new(None).to_string(), "Symbol()");
}
