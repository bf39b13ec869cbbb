//! Independent shallow copy
//!
//! The copy shares the source's prototype, so class membership carries
//! over, but gets its own property map filled once from the source's own
//! properties. Property values are copied by reference: nested objects stay
//! shared between source and copy.

use crate::enumerate::{own_keys_with, Enumeration};
use crate::object::ObjectRef;
use crate::value::Value;

/// Shallow-copy `value`, including non-enumerable properties
///
/// `null`, `undefined`, scalars and functions come back unchanged.
pub fn copy(value: &Value) -> Value {
    copy_with(value, Enumeration::All)
}

/// Shallow-copy `value`, listing source keys with the given mode
pub fn copy_with(value: &Value, mode: Enumeration) -> Value {
    match value {
        Value::Object(source) => Value::Object(copy_object(source, mode)),
        other => other.clone(),
    }
}

/// Shallow copy of an object
pub fn copy_object(source: &ObjectRef, mode: Enumeration) -> ObjectRef {
    let kind = source.kind();
    let target = ObjectRef::new(kind.clone(), source.prototype());

    // Wrappers and dates are rebuilt from their wrapped value alone
    if kind.is_value_object() {
        tracing::trace!("Copied {} {} by value", kind.class_tag(), source.id());
        return target;
    }

    let keys = own_keys_with(source, mode);
    for key in &keys {
        let Some(descriptor) = source.get_own_property(key) else {
            continue;
        };
        if let Err(err) = target.define_property(key, descriptor) {
            // A fresh target has nothing to conflict with
            tracing::warn!("Skipped property '{}' while copying {}: {}", key, source.id(), err);
        }
    }

    tracing::trace!(
        "Copied {} properties from {} into {}",
        keys.len(),
        source.id(),
        target.id()
    );
    target
}
