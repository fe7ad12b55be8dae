//! Runtime value representation for the taxonomy library.
//!
//! This module provides the core `Value` enum that models the universal
//! value domain the classifiers operate over: the two absence units,
//! the inline primitives, and every composite/reference kind that carries
//! a constructor identity of its own.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt as NumBigInt;
use num_traits::Zero;
use regex::Regex;

use crate::error::ValueError;
use crate::symbol::SymbolValue;

/// BigInt value wrapper for arbitrary precision integers.
///
/// Wraps `num_bigint::BigInt` so the surrounding value model stays
/// decoupled from the numeric backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigIntValue {
    inner: NumBigInt,
}

impl BigIntValue {
    /// Create a new BigIntValue from a NumBigInt
    pub fn new(inner: NumBigInt) -> Self {
        BigIntValue { inner }
    }

    /// Get a reference to the inner BigInt
    pub fn inner(&self) -> &NumBigInt {
        &self.inner
    }

    /// Whether this bigint is zero (the falsy bigint)
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
}

impl From<i32> for BigIntValue {
    fn from(v: i32) -> Self {
        BigIntValue::new(NumBigInt::from(v))
    }
}

impl From<i64> for BigIntValue {
    fn from(v: i64) -> Self {
        BigIntValue::new(NumBigInt::from(v))
    }
}

impl fmt::Display for BigIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Prototype link of a plain object.
///
/// An object created with no prototype chain has no reachable constructor
/// identity, which is the one case where constructor-name resolution fails
/// and the structural class tag takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prototype {
    /// Default prototype link; the constructor resolves to `Object`.
    Ordinary,
    /// No prototype chain; the constructor is unreachable.
    None,
}

/// Internal plain-object data
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// String-keyed properties
    pub properties: HashMap<String, Value>,
    /// Prototype link
    pub prototype: Prototype,
}

/// Internal array data
#[derive(Debug, Clone)]
pub struct ArrayData {
    /// Array elements
    pub elements: Vec<Value>,
}

/// Internal map data - preserves insertion order
#[derive(Debug, Clone)]
pub struct MapData {
    /// Map entries in insertion order
    pub entries: Vec<(Value, Value)>,
}

/// Internal set data - preserves insertion order
#[derive(Debug, Clone)]
pub struct SetData {
    /// Set values in insertion order
    pub values: Vec<Value>,
}

/// Internal date data, milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy)]
pub struct DateData {
    /// Epoch offset in milliseconds; non-finite means an invalid date
    pub epoch_ms: f64,
}

/// Internal regular expression data
#[derive(Debug)]
pub struct RegExpData {
    /// The pattern source text
    pub source: String,
    compiled: Regex,
}

impl RegExpData {
    /// Compile a pattern into regexp data
    pub fn new(source: &str) -> Result<Self, ValueError> {
        let compiled = Regex::new(source)?;
        Ok(RegExpData {
            source: source.to_string(),
            compiled,
        })
    }

    /// Test the pattern against a string
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }
}

/// Internal binary buffer data
#[derive(Debug, Clone)]
pub struct BufferData {
    /// Raw bytes
    pub bytes: Vec<u8>,
}

impl BufferData {
    /// Length of the buffer in bytes
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }
}

/// Settlement state of a promise value
#[derive(Debug, Clone, PartialEq)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Settled with a value
    Fulfilled(Value),
    /// Settled with a rejection reason
    Rejected(Value),
}

/// Internal promise data
#[derive(Debug, Clone, PartialEq)]
pub struct PromiseData {
    /// Current settlement state
    pub state: PromiseState,
}

/// The flavor of a callable value.
///
/// Classification treats all three identically (coarse `object`, fine
/// `Function`); the distinction exists so callers can model each callable
/// form the host language distinguishes syntactically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Ordinary (declared or expression) function
    Ordinary,
    /// Arrow function
    Arrow,
    /// Class constructor
    ClassConstructor,
}

/// Internal function data.
///
/// Classification never invokes a value, so no callable payload is stored;
/// the name and kind are enough to model every callable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionData {
    /// Declared name; empty for anonymous and arrow functions
    pub name: String,
    /// Which callable form this is
    pub kind: FunctionKind,
}

/// A primitive wrapped in its object form.
///
/// Boxed primitives are reference values: they carry identity, are always
/// truthy, and classify as objects named after their wrapper constructor.
/// They are never unwrapped back to the primitive they hold.
#[derive(Debug, Clone)]
pub enum BoxedPrimitive {
    /// Boxed number
    Number(f64),
    /// Boxed string
    String(String),
    /// Boxed boolean
    Boolean(bool),
    /// Boxed symbol
    Symbol(SymbolValue),
    /// Boxed bigint
    BigInt(BigIntValue),
}

impl BoxedPrimitive {
    /// The wrapper constructor's name
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            BoxedPrimitive::Number(_) => "Number",
            BoxedPrimitive::String(_) => "String",
            BoxedPrimitive::Boolean(_) => "Boolean",
            BoxedPrimitive::Symbol(_) => "Symbol",
            BoxedPrimitive::BigInt(_) => "BigInt",
        }
    }
}

/// Internal data of a user-defined class instance
#[derive(Debug)]
pub struct InstanceData {
    /// Class name exactly as declared
    pub class_name: String,
    /// Instance fields
    pub fields: RefCell<HashMap<String, Value>>,
}

/// Internal proxy data.
///
/// A revoked proxy has no target; its constructor identity is unreachable
/// and naming degrades to the structural fallback.
#[derive(Debug, Clone)]
pub struct ProxyData {
    /// Proxied target, `None` once revoked
    pub target: Option<Value>,
}

impl ProxyData {
    /// Revoke the proxy, severing it from its target
    pub fn revoke(&mut self) {
        self.target = None;
    }
}

/// Represents any runtime value the classifiers operate over.
///
/// Primitives are stored inline; composite/reference values are held behind
/// `Rc` so that equality can follow identity, the way the host runtime
/// distinguishes two empty arrays from one array seen twice. Mutable
/// payloads additionally sit in a `RefCell`.
///
/// # Examples
///
/// ```
/// use value_types::Value;
///
/// let n = Value::number(42.0);
/// assert!(n.is_truthy());
/// assert!(n.is_number());
///
/// let arr = Value::array_from(vec![Value::number(1.0)]);
/// assert_eq!(arr.constructor_name().as_deref(), Some("Array"));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The `undefined` absence unit
    Undefined,
    /// The `null` absence unit
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// BigInt value (arbitrary precision integer)
    BigInt(BigIntValue),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// Plain object with properties and a prototype link
    Object(Rc<RefCell<ObjectData>>),
    /// Array
    Array(Rc<RefCell<ArrayData>>),
    /// Map collection
    Map(Rc<RefCell<MapData>>),
    /// Set collection
    Set(Rc<RefCell<SetData>>),
    /// Date object
    Date(Rc<RefCell<DateData>>),
    /// RegExp object
    RegExp(Rc<RegExpData>),
    /// Binary buffer
    ArrayBuffer(Rc<RefCell<BufferData>>),
    /// Promise object
    Promise(Rc<RefCell<PromiseData>>),
    /// Callable value (function, arrow, class constructor)
    Function(Rc<FunctionData>),
    /// Boxed primitive wrapper object
    Boxed(Rc<BoxedPrimitive>),
    /// User-defined class instance
    Instance(Rc<InstanceData>),
    /// Proxy wrapping a target value, possibly revoked
    Proxy(Rc<RefCell<ProxyData>>),
}

impl Value {
    /// Create undefined value
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create bigint value
    pub fn bigint(v: impl Into<BigIntValue>) -> Self {
        Value::BigInt(v.into())
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a fresh symbol value with an optional description
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(SymbolValue::new(description))
    }

    /// Create empty object with an ordinary prototype link
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            prototype: Prototype::Ordinary,
        })))
    }

    /// Create an object with no prototype chain.
    ///
    /// Such an object has no reachable constructor; fine classification
    /// falls back to its structural class tag, which is still `Object`.
    pub fn object_with_null_prototype() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            prototype: Prototype::None,
        })))
    }

    /// Create an object from key/value pairs
    pub fn object_from(props: Vec<(String, Value)>) -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: props.into_iter().collect(),
            prototype: Prototype::Ordinary,
        })))
    }

    /// Create empty array
    pub fn array() -> Self {
        Value::Array(Rc::new(RefCell::new(ArrayData {
            elements: Vec::new(),
        })))
    }

    /// Create array from values
    pub fn array_from(values: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(ArrayData { elements: values })))
    }

    /// Create an empty Map
    pub fn map() -> Self {
        Value::Map(Rc::new(RefCell::new(MapData {
            entries: Vec::new(),
        })))
    }

    /// Create a Map from entries, preserving order
    pub fn map_from(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Rc::new(RefCell::new(MapData { entries })))
    }

    /// Create an empty Set
    pub fn set_collection() -> Self {
        Value::Set(Rc::new(RefCell::new(SetData { values: Vec::new() })))
    }

    /// Create a Set from values, preserving order
    pub fn set_from(values: Vec<Value>) -> Self {
        Value::Set(Rc::new(RefCell::new(SetData { values })))
    }

    /// Create a Date from epoch milliseconds
    pub fn date(epoch_ms: f64) -> Self {
        Value::Date(Rc::new(RefCell::new(DateData { epoch_ms })))
    }

    /// Create a RegExp value by compiling a pattern.
    ///
    /// This is the one fallible constructor: an invalid pattern surfaces as
    /// [`ValueError::InvalidPattern`].
    pub fn regexp(source: &str) -> Result<Self, ValueError> {
        Ok(Value::RegExp(Rc::new(RegExpData::new(source)?)))
    }

    /// Create a zero-filled binary buffer of the given byte length
    pub fn array_buffer(byte_length: usize) -> Self {
        Value::ArrayBuffer(Rc::new(RefCell::new(BufferData {
            bytes: vec![0; byte_length],
        })))
    }

    /// Create a binary buffer from bytes
    pub fn array_buffer_from(bytes: Vec<u8>) -> Self {
        Value::ArrayBuffer(Rc::new(RefCell::new(BufferData { bytes })))
    }

    /// Create a pending promise
    pub fn promise() -> Self {
        Value::Promise(Rc::new(RefCell::new(PromiseData {
            state: PromiseState::Pending,
        })))
    }

    /// Create a promise fulfilled with a value
    pub fn fulfilled(value: Value) -> Self {
        Value::Promise(Rc::new(RefCell::new(PromiseData {
            state: PromiseState::Fulfilled(value),
        })))
    }

    /// Create a promise rejected with a reason
    pub fn rejected(reason: Value) -> Self {
        Value::Promise(Rc::new(RefCell::new(PromiseData {
            state: PromiseState::Rejected(reason),
        })))
    }

    /// Create an ordinary function value
    pub fn function(name: &str) -> Self {
        Value::Function(Rc::new(FunctionData {
            name: name.to_string(),
            kind: FunctionKind::Ordinary,
        }))
    }

    /// Create an arrow function value
    pub fn arrow_function() -> Self {
        Value::Function(Rc::new(FunctionData {
            name: String::new(),
            kind: FunctionKind::Arrow,
        }))
    }

    /// Create a class constructor value
    pub fn class_constructor(name: &str) -> Self {
        Value::Function(Rc::new(FunctionData {
            name: name.to_string(),
            kind: FunctionKind::ClassConstructor,
        }))
    }

    /// Box a number into its wrapper object
    pub fn boxed_number(v: f64) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::Number(v)))
    }

    /// Box a string into its wrapper object
    pub fn boxed_string(s: impl Into<String>) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::String(s.into())))
    }

    /// Box a boolean into its wrapper object
    pub fn boxed_boolean(v: bool) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::Boolean(v)))
    }

    /// Box a symbol into its wrapper object
    pub fn boxed_symbol(sym: SymbolValue) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::Symbol(sym)))
    }

    /// Box a bigint into its wrapper object
    pub fn boxed_bigint(v: impl Into<BigIntValue>) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::BigInt(v.into())))
    }

    /// Create a user-defined class instance with no fields
    pub fn instance(class_name: &str) -> Self {
        Value::Instance(Rc::new(InstanceData {
            class_name: class_name.to_string(),
            fields: RefCell::new(HashMap::new()),
        }))
    }

    /// Create a user-defined class instance from fields
    pub fn instance_from(class_name: &str, fields: Vec<(String, Value)>) -> Self {
        Value::Instance(Rc::new(InstanceData {
            class_name: class_name.to_string(),
            fields: RefCell::new(fields.into_iter().collect()),
        }))
    }

    /// Create a live proxy around a target value
    pub fn proxy(target: Value) -> Self {
        Value::Proxy(Rc::new(RefCell::new(ProxyData {
            target: Some(target),
        })))
    }

    /// Create an already-revoked proxy
    pub fn revoked_proxy() -> Self {
        Value::Proxy(Rc::new(RefCell::new(ProxyData { target: None })))
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is boolean
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Check if value is number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is bigint
    pub fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    /// Check if value is string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is a plain object
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if value is a Map
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if value is a Set
    pub fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    /// Check if value is callable
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Returns whether this value is truthy under host truthiness rules.
    ///
    /// The falsy values are:
    /// - undefined
    /// - null
    /// - false
    /// - 0 (including -0)
    /// - NaN
    /// - "" (empty string)
    /// - 0n
    ///
    /// Every reference value is truthy, boxed falsy primitives included.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::number(f64::NAN).is_truthy());
    /// assert!(!Value::string("").is_truthy());
    ///
    /// assert!(Value::number(42.0).is_truthy());
    /// assert!(Value::boxed_number(0.0).is_truthy());
    /// assert!(Value::array().is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            // Every reference value is truthy.
            _ => true,
        }
    }

    /// Resolve the declared name of this value's constructor identity.
    ///
    /// Returns `None` when no constructor is reachable: for primitives and
    /// absence units (which have no object identity), for objects created
    /// with no prototype chain, and for revoked proxies. A live proxy
    /// resolves transparently through its target.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_types::Value;
    ///
    /// assert_eq!(Value::array().constructor_name().as_deref(), Some("Array"));
    /// assert_eq!(Value::object_with_null_prototype().constructor_name(), None);
    /// assert_eq!(Value::number(1.0).constructor_name(), None);
    /// ```
    pub fn constructor_name(&self) -> Option<String> {
        match self {
            Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::String(_)
            | Value::Symbol(_) => None,
            Value::Object(data) => match data.borrow().prototype {
                Prototype::Ordinary => Some("Object".to_string()),
                Prototype::None => None,
            },
            Value::Array(_) => Some("Array".to_string()),
            Value::Map(_) => Some("Map".to_string()),
            Value::Set(_) => Some("Set".to_string()),
            Value::Date(_) => Some("Date".to_string()),
            Value::RegExp(_) => Some("RegExp".to_string()),
            Value::ArrayBuffer(_) => Some("ArrayBuffer".to_string()),
            Value::Promise(_) => Some("Promise".to_string()),
            Value::Function(_) => Some("Function".to_string()),
            Value::Boxed(b) => Some(b.wrapper_name().to_string()),
            Value::Instance(data) => Some(data.class_name.clone()),
            Value::Proxy(data) => data
                .borrow()
                .target
                .as_ref()
                .and_then(Value::constructor_name),
        }
    }

    /// The structural class tag of this value.
    ///
    /// This mirrors the internal label the host runtime uses to stringify
    /// built-ins (`[object Array]`, `[object Map]`, ...). It is total over
    /// every variant and serves as the fallback naming source when
    /// [`constructor_name`](Value::constructor_name) cannot resolve: user
    /// class instances and prototype-less objects both tag as `Object`.
    pub fn class_tag(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::BigInt(_) => "BigInt",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Object(_) => "Object",
            Value::Array(_) => "Array",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
            Value::Date(_) => "Date",
            Value::RegExp(_) => "RegExp",
            Value::ArrayBuffer(_) => "ArrayBuffer",
            Value::Promise(_) => "Promise",
            Value::Function(_) => "Function",
            Value::Boxed(b) => b.wrapper_name(),
            Value::Instance(_) => "Object",
            Value::Proxy(data) => match data.borrow().target.as_ref() {
                Some(target) => target.class_tag(),
                None => "Object",
            },
        }
    }

    /// Look up a string-keyed property on an object or class instance.
    ///
    /// Returns `None` for absent keys and for every value kind that carries
    /// no property map. A live proxy forwards to its target.
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(data) => data.borrow().properties.get(key).cloned(),
            Value::Instance(data) => data.fields.borrow().get(key).cloned(),
            Value::Proxy(data) => data
                .borrow()
                .target
                .as_ref()
                .and_then(|target| target.property(key)),
            _ => None,
        }
    }

    /// Set a string-keyed property on an object or class instance.
    ///
    /// Returns false for value kinds that carry no property map.
    pub fn set_property(&self, key: &str, value: Value) -> bool {
        match self {
            Value::Object(data) => {
                data.borrow_mut().properties.insert(key.to_string(), value);
                true
            }
            Value::Instance(data) => {
                data.fields.borrow_mut().insert(key.to_string(), value);
                true
            }
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            // Reference kinds compare by identity, not structure.
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            (Value::ArrayBuffer(a), Value::ArrayBuffer(b)) => Rc::ptr_eq(a, b),
            (Value::Promise(a), Value::Promise(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Boxed(a), Value::Boxed(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            (Value::Proxy(a), Value::Proxy(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Host `String()` conversion rules:
/// - undefined → "undefined", null → "null"
/// - booleans → "true" / "false"
/// - numbers → decimal, with NaN / Infinity spelled out
/// - bigints → digits with an `n` suffix
/// - boxed primitives → their wrapped primitive's string
/// - collections and plain objects → `[object Tag]`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Number(n) => write_number(f, *n),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Array(data) => {
                let data = data.borrow();
                let mut first = true;
                for element in &data.elements {
                    if !first {
                        write!(f, ",")?;
                    }
                    first = false;
                    match element {
                        Value::Undefined | Value::Null => {}
                        other => write!(f, "{}", other)?,
                    }
                }
                Ok(())
            }
            Value::Date(data) => write_date(f, data.borrow().epoch_ms),
            Value::RegExp(data) => write!(f, "/{}/", data.source),
            Value::Function(data) => {
                write!(f, "function {}() {{ [native code] }}", data.name)
            }
            Value::Boxed(boxed) => match boxed.as_ref() {
                BoxedPrimitive::Number(n) => write_number(f, *n),
                BoxedPrimitive::String(s) => write!(f, "{}", s),
                BoxedPrimitive::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
                BoxedPrimitive::Symbol(sym) => write!(f, "{}", sym),
                BoxedPrimitive::BigInt(n) => write!(f, "{}n", n),
            },
            Value::Proxy(data) => match data.borrow().target.as_ref() {
                Some(target) => write!(f, "{}", target),
                None => write!(f, "[object Object]"),
            },
            other => write!(f, "[object {}]", other.class_tag()),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

fn write_date(f: &mut fmt::Formatter<'_>, epoch_ms: f64) -> fmt::Result {
    if !epoch_ms.is_finite() {
        return write!(f, "Invalid Date");
    }
    match chrono::DateTime::from_timestamp_millis(epoch_ms as i64) {
        Some(dt) => write!(f, "{}", dt.format("%a %b %d %Y %H:%M:%S GMT+0000")),
        None => write!(f, "Invalid Date"),
    }
}
