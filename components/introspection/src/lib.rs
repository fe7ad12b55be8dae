//! Runtime value-type introspection.
//!
//! Given an arbitrary [`Value`](value_types::Value), this crate answers
//! "what kind of value is this" at two granularities, plus a set of
//! independent predicate helpers over the same domain:
//!
//! - [`classify_coarse`] - one of eight broad tags ([`CoarseTag`])
//! - [`classify_fine`] - the value's constructor/class name
//! - predicates - emptiness, nullish/primitive/falsy checks, numeric
//!   validity, keyed property access
//!
//! Every function here is pure, total, and synchronous: no input produces
//! an error, and nothing outside the argument is read or written.
//!
//! # Examples
//!
//! ```
//! use introspection::{classify_coarse, classify_fine, CoarseTag};
//! use value_types::Value;
//!
//! assert_eq!(classify_coarse(&Value::number(123.0)), CoarseTag::Number);
//! assert_eq!(classify_fine(&Value::number(123.0)), "number");
//!
//! let boxed = Value::boxed_number(123.0);
//! assert_eq!(classify_coarse(&boxed), CoarseTag::Object);
//! assert_eq!(classify_fine(&boxed), "Number");
//!
//! assert_eq!(classify_fine(&Value::instance("MyClass")), "MyClass");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod classify;
mod predicate;

pub use classify::{classify_coarse, classify_fine, CoarseTag, ParseCoarseTagError};
pub use predicate::{
    get_value_by_key, is_falsy, is_not_empty_array, is_not_empty_map, is_not_empty_set,
    is_not_empty_string, is_nullish, is_primitive, is_real_number,
};
