//! Property keys and descriptors

use crate::value::{Symbol, Value};
use std::fmt;

/// Property key
///
/// Ordering puts array indices first (ascending), then strings, then
/// symbols, which is also the order in which own keys are listed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKey {
    Index(u32),
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    /// Convert an arbitrary value to a key (`ToPropertyKey`)
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                let n = n.into_inner();
                if n >= 0.0 && n.fract() == 0.0 && n < f64::from(u32::MAX) {
                    // Non-negative integer below u32::MAX, so the cast is exact
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let index = n as u32;
                    PropertyKey::Index(index)
                } else {
                    PropertyKey::String(value.to_string())
                }
            }
            Value::String(s) => PropertyKey::from(s.as_str()),
            Value::Symbol(sym) => PropertyKey::Symbol(sym.clone()),
            other => PropertyKey::String(other.to_string()),
        }
    }

    pub fn as_index(&self) -> Option<u32> {
        match self {
            PropertyKey::Index(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Index(i) => write!(f, "{i}"),
            PropertyKey::String(s) => write!(f, "{s}"),
            PropertyKey::Symbol(sym) => write!(f, "{sym}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        // Canonical array index strings become index keys
        if let Ok(idx) = s.parse::<u32>() {
            if idx != u32::MAX && idx.to_string() == s {
                return PropertyKey::Index(idx);
            }
        }
        PropertyKey::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::from(s.as_str())
    }
}

impl From<&String> for PropertyKey {
    fn from(s: &String) -> Self {
        PropertyKey::from(s.as_str())
    }
}

impl From<u32> for PropertyKey {
    fn from(i: u32) -> Self {
        // 2^32 - 1 is not an array index
        if i == u32::MAX {
            PropertyKey::String(i.to_string())
        } else {
            PropertyKey::Index(i)
        }
    }
}

impl From<Symbol> for PropertyKey {
    fn from(sym: Symbol) -> Self {
        PropertyKey::Symbol(sym)
    }
}

impl From<&Symbol> for PropertyKey {
    fn from(sym: &Symbol) -> Self {
        PropertyKey::Symbol(sym.clone())
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(key: &PropertyKey) -> Self {
        key.clone()
    }
}

/// Data property: value plus attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub value: Value,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl PropertyDescriptor {
    /// Plain assignment attributes: writable, enumerable, configurable
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Hidden from enumeration, otherwise like [`PropertyDescriptor::data`]
    pub fn hidden(value: impl Into<Value>) -> Self {
        Self::data(value).with_enumerable(false)
    }

    #[must_use]
    pub fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    #[must_use]
    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    #[must_use]
    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }
}
