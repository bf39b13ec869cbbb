//! Structural equality
//!
//! Two objects are deep-equal when they share a prototype and kind, wrap the
//! same primitive (if any), and have the same enumerable own properties with
//! deep-equal values.

use crate::enumerate::enumerable_own_keys;
use crate::object::{ObjectId, ObjectRef};
use crate::value::Value;
use std::collections::HashSet;

/// Compare two values structurally
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    let mut seen = HashSet::new();
    values_equal(a, b, &mut seen)
}

fn values_equal(a: &Value, b: &Value, seen: &mut HashSet<(ObjectId, ObjectId)>) -> bool {
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y, seen),
        _ => a == b,
    }
}

fn objects_equal(a: &ObjectRef, b: &ObjectRef, seen: &mut HashSet<(ObjectId, ObjectId)>) -> bool {
    if a.ptr_eq(b) {
        return true;
    }
    // Already under comparison further up: assume equal so cycles terminate
    if !seen.insert((a.id(), b.id())) {
        return true;
    }

    let same_prototype = match (a.prototype(), b.prototype()) {
        (Some(x), Some(y)) => x.ptr_eq(&y),
        (None, None) => true,
        _ => false,
    };
    if !same_prototype || a.kind() != b.kind() {
        return false;
    }

    let keys = enumerable_own_keys(a);
    if keys != enumerable_own_keys(b) {
        return false;
    }
    keys.iter().all(|key| {
        match (a.get_own_property(key), b.get_own_property(key)) {
            (Some(x), Some(y)) => values_equal(&x.value, &y.value, seen),
            _ => false,
        }
    })
}
