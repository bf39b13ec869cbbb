//! Message sends - the dynamically dispatched side of the object model
//!
//! A `Send` is resolved through the receiver's prototype chain, so an
//! object can override any method, built-ins included. Duplication never
//! goes through here; see [`crate::enumerate`].

use crate::error::{ObjectError, Result};
use crate::object::ObjectRef;
use crate::property::PropertyKey;
use crate::value::Value;
use std::fmt;

/// Message to an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Read a property: `obj.a`
    Get(PropertyKey),

    /// Assign a property: `obj.a = v`
    Set(PropertyKey, Value),

    /// Remove an own property: `delete obj.a`
    Delete(PropertyKey),

    /// Call a method found through the prototype chain
    Send { selector: String, args: Vec<Value> },
}

impl Message {
    /// Build a method call
    pub fn send(selector: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        Self::Send {
            selector: selector.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Get the selector (property or method name) for this message
    pub fn selector(&self) -> String {
        match self {
            Self::Get(key) | Self::Set(key, _) | Self::Delete(key) => key.to_string(),
            Self::Send { selector, .. } => selector.clone(),
        }
    }

    /// Get the number of arguments
    pub fn arg_count(&self) -> usize {
        match self {
            Self::Get(_) | Self::Delete(_) => 0,
            Self::Set(_, _) => 1,
            Self::Send { args, .. } => args.len(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get(key) => write!(f, "{key}"),
            Self::Set(key, value) => write!(f, "{key} = {value}"),
            Self::Delete(key) => write!(f, "delete {key}"),
            Self::Send { selector, args } => {
                write!(f, "{selector}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl ObjectRef {
    /// Deliver a message to this object
    ///
    /// `Set` and `Delete` answer whether they succeeded.
    pub fn send(&self, message: &Message) -> Result<Value> {
        match message {
            Message::Get(key) => Ok(self.get(key)),
            Message::Set(key, value) => Ok(Value::Boolean(self.set(key, value.clone()))),
            Message::Delete(key) => Ok(Value::Boolean(self.delete(key))),
            Message::Send { selector, args } => match self.get(selector.as_str()) {
                Value::Function(method) => method.call(&Value::from(self), args),
                _ => Err(ObjectError::NotCallable(selector.clone())),
            },
        }
    }
}

/// Macro for building messages
#[macro_export]
macro_rules! msg {
    // Delete: msg!(delete a)
    (delete $prop:ident) => {
        $crate::message::Message::Delete($crate::property::PropertyKey::from(stringify!($prop)))
    };

    // Method call: msg!(hasOwnProperty("a"))
    ($selector:ident ( $($arg:expr),* $(,)? )) => {
        $crate::message::Message::Send {
            selector: stringify!($selector).to_string(),
            args: vec![$($crate::value::Value::from($arg)),*],
        }
    };

    // Property setter: msg!(a: "Apple")
    ($prop:ident : $value:expr) => {
        $crate::message::Message::Set(
            $crate::property::PropertyKey::from(stringify!($prop)),
            $crate::value::Value::from($value),
        )
    };

    // Property getter: msg!(a) - must be last
    ($prop:ident) => {
        $crate::message::Message::Get($crate::property::PropertyKey::from(stringify!($prop)))
    };
}
