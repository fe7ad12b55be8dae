//! Runtime value model for the taxonomy library.
//!
//! This crate provides the foundational types the classifiers operate
//! over: a tagged representation of the universal value domain together
//! with the read-only structural queries classification is built from.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`SymbolValue`] - Unique symbol primitive
//! - [`BigIntValue`] - Arbitrary precision integer wrapper
//! - [`ValueError`] - Fallible-construction errors
//!
//! # Examples
//!
//! ```
//! use value_types::Value;
//!
//! let num = Value::number(42.0);
//! assert!(num.is_truthy());
//!
//! // Reference values carry a constructor identity...
//! let arr = Value::array();
//! assert_eq!(arr.constructor_name().as_deref(), Some("Array"));
//!
//! // ...unless no prototype chain exists to reach it through.
//! let bare = Value::object_with_null_prototype();
//! assert_eq!(bare.constructor_name(), None);
//! assert_eq!(bare.class_tag(), "Object");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod symbol;
mod value;

pub use error::ValueError;
pub use symbol::SymbolValue;
pub use value::{
    ArrayData, BigIntValue, BoxedPrimitive, BufferData, DateData, FunctionData, FunctionKind,
    InstanceData, MapData, ObjectData, PromiseData, PromiseState, Prototype, ProxyData,
    RegExpData, SetData, Value,
};
