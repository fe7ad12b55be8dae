//! Predicate library over the universal value domain.
//!
//! Independent, pure boolean checks plus one keyed accessor. None of them
//! errs or panics for any input; in a host with flow-sensitive narrowing
//! these would refine the static type of their argument, here the keyed
//! accessor returns an `Option` instead.

use value_types::Value;

/// True when the value is a string with at least one character.
pub fn is_not_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty())
}

/// True when the value is an array with at least one element.
pub fn is_not_empty_array(value: &Value) -> bool {
    matches!(value, Value::Array(data) if !data.borrow().elements.is_empty())
}

/// True when the value is a Set with at least one member.
pub fn is_not_empty_set(value: &Value) -> bool {
    matches!(value, Value::Set(data) if !data.borrow().values.is_empty())
}

/// True when the value is a Map with at least one entry.
pub fn is_not_empty_map(value: &Value) -> bool {
    matches!(value, Value::Map(data) if !data.borrow().entries.is_empty())
}

/// True when the value is one of the two absence units.
pub fn is_nullish(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Null)
}

/// True when the value is a primitive, the absence units included.
///
/// A primitive is any value that is not its own boxed-object form: boxing
/// it would produce a distinct reference. Boxed primitives are already
/// reference values and report false.
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::String(_)
            | Value::Symbol(_)
    )
}

/// True when the value coerces to boolean false under host truthiness.
pub fn is_falsy(value: &Value) -> bool {
    !value.is_truthy()
}

/// True when the value is a number and not the NaN sentinel.
///
/// Numeric strings and boxed numbers are not numbers and report false.
pub fn is_real_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_nan())
}

/// Look up `key` on a structured record, propagating the stored value.
///
/// A pure pass-through accessor: no coercion, no validation. Absent keys
/// and values without a property map yield `None`.
pub fn get_value_by_key(value: &Value, key: &str) -> Option<Value> {
    value.property(key)
}
