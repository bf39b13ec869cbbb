//! Value type for object properties and function arguments
//!
//! Everything except [`Value::Object`] is a scalar with value semantics
//! (functions included), so duplication passes it through untouched.

use crate::function::Function;
use crate::object::ObjectRef;
use ordered_float::OrderedFloat;
use std::fmt;
use uuid::Uuid;

/// Unique symbol, usable as a property key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    id: Uuid,
    description: Option<String>,
}

impl Symbol {
    /// Create a fresh symbol, distinct from every other symbol
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.map(str::to_string),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Core value type
///
/// `==` is identity: scalars compare by value, functions and objects by
/// reference. Use [`crate::deep_equal`] for structural comparison.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,

    Null,

    Boolean(bool),

    /// IEEE double; `OrderedFloat` so that `NaN == NaN`
    Number(OrderedFloat<f64>),

    String(String),

    Symbol(Symbol),

    Function(Function),

    /// Heap object (plain, array, class instance, wrapper, date)
    Object(ObjectRef),
}

impl Value {
    /// True only for heap objects; `null` and functions are not objects here
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// True for `null` and `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.into_inner()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness with the usual dynamic-language rules
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => n.into_inner() != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Function(_) | Value::Object(_) => true,
        }
    }

    /// `typeof` tag
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Object(_) => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Symbol(sym) => write!(f, "{sym}"),
            Value::Function(func) => write!(f, "function {}()", func.name()),
            Value::Object(obj) => write!(f, "[object {}]", obj.class_tag()),
        }
    }
}

// Conversions from Rust types
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(OrderedFloat(f64::from(i)))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Number(OrderedFloat(f64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(OrderedFloat(f))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<ObjectRef> for Value {
    fn from(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }
}

impl From<&ObjectRef> for Value {
    fn from(obj: &ObjectRef) -> Self {
        Value::Object(obj.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(42).as_f64(), Some(42.0));
        assert_eq!(Value::from(3.5).as_f64(), Some(3.5));
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_type_of_null_is_object_but_not_an_object() {
        assert_eq!(Value::Null.type_of(), "object");
        assert!(!Value::Null.is_object());
        assert!(Value::Null.as_object().is_none());
    }

    #[test]
    fn test_truthy() {
        assert!(Value::from(true).is_truthy());
        assert!(Value::from(42).is_truthy());
        assert!(Value::from("hello").is_truthy());
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
    }

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new(Some("tag"));
        let b = Symbol::new(Some("tag"));
        assert_ne!(Value::from(a.clone()), Value::from(b));
        assert_eq!(Value::from(a.clone()), Value::from(a));
    }

    #[test]
    fn test_symbol_description() {
        let tagged = Symbol::new(Some("tag"));
        assert_eq!(tagged.description(), Some("tag"));
        assert_eq!(tagged.to_string(), "Symbol(tag)");

        let anonymous = Symbol::new(None);
        assert_eq!(anonymous.description(), None);
        assert_eq!(anonymous.to_string(), "Symbol()");
    }
}
