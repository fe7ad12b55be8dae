//! The two-tier type classifier.
//!
//! Coarse classification buckets every value into one of eight broad tags;
//! fine classification names a value's constructor, falling back to the
//! structural class tag when no constructor is reachable. Both functions
//! are total: no input produces an error or a panic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use value_types::Value;

/// The broad category a value belongs to.
///
/// The string form of each tag is a fixed literal; callables are folded
/// into [`Object`](CoarseTag::Object) at this granularity, so the closed
/// set has exactly eight members:
/// `"string" | "number" | "bigint" | "boolean" | "symbol" | "undefined" |
/// "null" | "object"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarseTag {
    /// String primitive
    String,
    /// Number primitive
    Number,
    /// BigInt primitive
    BigInt,
    /// Boolean primitive
    Boolean,
    /// Symbol primitive
    Symbol,
    /// The `undefined` absence unit
    Undefined,
    /// The `null` absence unit
    Null,
    /// Every reference value, callables included
    Object,
}

impl CoarseTag {
    /// The tag's literal string form
    pub fn as_str(&self) -> &'static str {
        match self {
            CoarseTag::String => "string",
            CoarseTag::Number => "number",
            CoarseTag::BigInt => "bigint",
            CoarseTag::Boolean => "boolean",
            CoarseTag::Symbol => "symbol",
            CoarseTag::Undefined => "undefined",
            CoarseTag::Null => "null",
            CoarseTag::Object => "object",
        }
    }

    /// All eight tags, in their documented order
    pub fn all() -> [CoarseTag; 8] {
        [
            CoarseTag::String,
            CoarseTag::Number,
            CoarseTag::BigInt,
            CoarseTag::Boolean,
            CoarseTag::Symbol,
            CoarseTag::Undefined,
            CoarseTag::Null,
            CoarseTag::Object,
        ]
    }
}

impl fmt::Display for CoarseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a coarse tag from a string outside the literal set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coarse tag: {0:?}")]
pub struct ParseCoarseTagError(String);

impl FromStr for CoarseTag {
    type Err = ParseCoarseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(CoarseTag::String),
            "number" => Ok(CoarseTag::Number),
            "bigint" => Ok(CoarseTag::BigInt),
            "boolean" => Ok(CoarseTag::Boolean),
            "symbol" => Ok(CoarseTag::Symbol),
            "undefined" => Ok(CoarseTag::Undefined),
            "null" => Ok(CoarseTag::Null),
            "object" => Ok(CoarseTag::Object),
            other => Err(ParseCoarseTagError(other.to_string())),
        }
    }
}

/// Classify a value into its coarse tag.
///
/// The absence units report themselves, primitives report their own kind,
/// and everything else — callables, boxed primitives, arrays, collections,
/// dates, regexps, buffers, promises, class instances, proxies — collapses
/// to [`CoarseTag::Object`]. Sub-object distinctions are deliberately
/// discarded here; that is [`classify_fine`]'s job.
///
/// # Examples
///
/// ```
/// use introspection::{classify_coarse, CoarseTag};
/// use value_types::Value;
///
/// assert_eq!(classify_coarse(&Value::number(123.0)), CoarseTag::Number);
/// assert_eq!(classify_coarse(&Value::boxed_number(123.0)), CoarseTag::Object);
/// assert_eq!(classify_coarse(&Value::function("f")), CoarseTag::Object);
/// ```
pub fn classify_coarse(value: &Value) -> CoarseTag {
    match value {
        Value::Undefined => CoarseTag::Undefined,
        Value::Null => CoarseTag::Null,
        Value::Boolean(_) => CoarseTag::Boolean,
        Value::Number(_) => CoarseTag::Number,
        Value::BigInt(_) => CoarseTag::BigInt,
        Value::String(_) => CoarseTag::String,
        Value::Symbol(_) => CoarseTag::Symbol,
        // Callables and every other reference value.
        _ => CoarseTag::Object,
    }
}

/// Classify a value into its fine-grained type name.
///
/// - Absence units yield their textual names, `"undefined"` and `"null"`.
/// - Primitives yield their lowercase kind name.
/// - Reference values yield their constructor's declared name: built-in
///   names verbatim (`"Array"`, `"Map"`, `"RegExp"`, ...), wrapper names
///   for boxed primitives, user class names verbatim, and `"Function"`
///   for every callable form.
/// - When no constructor is reachable — an object created with no
///   prototype chain, or a revoked proxy — the structural class tag is
///   substituted, which for both still yields `"Object"`. A live proxy is
///   named as its target.
///
/// Never fails for any input.
///
/// # Examples
///
/// ```
/// use introspection::classify_fine;
/// use value_types::Value;
///
/// assert_eq!(classify_fine(&Value::number(123.0)), "number");
/// assert_eq!(classify_fine(&Value::boxed_number(123.0)), "Number");
/// assert_eq!(classify_fine(&Value::array()), "Array");
/// assert_eq!(classify_fine(&Value::object_with_null_prototype()), "Object");
/// ```
pub fn classify_fine(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::BigInt(_) => "bigint".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Symbol(_) => "symbol".to_string(),
        reference => reference
            .constructor_name()
            .unwrap_or_else(|| reference.class_tag().to_string()),
    }
}
