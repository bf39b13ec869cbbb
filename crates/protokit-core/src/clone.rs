//! Prototype-delegating clone
//!
//! A clone is an empty object whose prototype is the original. Reads that
//! miss on the clone are answered by the original's current state; writes
//! land on the clone; deleting a shadowing property uncovers the original's
//! value again.

use crate::object::ObjectRef;
use crate::value::Value;

/// Clone `value` by delegation
///
/// `null`, `undefined`, scalars and functions come back unchanged.
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Object(original) => Value::Object(clone_object(original)),
        other => other.clone(),
    }
}

/// Delegating clone of an object
pub fn clone_object(original: &ObjectRef) -> ObjectRef {
    let clone = ObjectRef::ordinary(Some(original.clone()));
    tracing::trace!("Cloned object {} as {}", original.id(), clone.id());
    clone
}
