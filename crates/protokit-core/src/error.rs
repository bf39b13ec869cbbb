//! Errors raised by object-model operations
//!
//! `clone` and `copy` never fail. Everything here comes from defining
//! properties, rewiring prototypes, or calling functions.

use crate::object::ObjectId;
use crate::property::PropertyKey;
use thiserror::Error;

/// Failure of an object-model operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// Attempt to change a non-configurable property
    #[error("cannot redefine non-configurable property '{0}'")]
    NonConfigurable(PropertyKey),

    /// Prototype assignment would make the chain loop back to the object
    #[error("cyclic prototype chain through object {0}")]
    PrototypeCycle(ObjectId),

    /// Message send resolved to something that is not a function
    #[error("{0} is not a function")]
    NotCallable(String),

    /// Array `length` set to a non index value
    #[error("invalid array length: {0}")]
    InvalidArrayLength(String),

    /// Error raised from inside a native function
    #[error("{0}")]
    Thrown(String),
}

impl ObjectError {
    /// Build an error to raise from a native function body
    pub fn thrown(message: impl Into<String>) -> Self {
        Self::Thrown(message.into())
    }
}

/// Result alias for object-model operations
pub type Result<T, E = ObjectError> = std::result::Result<T, E>;
