//! Heap objects with prototype delegation
//!
//! An object is an own-property map plus an optional prototype. Reads fall
//! through to the prototype chain on a miss; writes and deletes only ever
//! touch the receiver's own map.

use crate::error::{ObjectError, Result};
use crate::property::{PropertyDescriptor, PropertyKey};
use crate::value::Value;
use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

const LENGTH: &str = "length";

/// Unique identifier for an object, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    /// Create a new unique object ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Internal shape of an object
///
/// The value-object kinds (`Boolean`, `Number`, `String`, `Date`) carry a
/// wrapped scalar that is duplicated by value.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    /// Plain object or class instance
    Ordinary,

    /// Array; elements live in the property map under index keys
    Array { length: u32 },

    /// Boxed boolean
    Boolean(bool),

    /// Boxed number
    Number(OrderedFloat<f64>),

    /// Boxed string
    String(String),

    /// Point in time
    Date(DateTime<Utc>),
}

impl ObjectKind {
    /// Built-in class tag, as reported by `Object.prototype.toString`
    pub fn class_tag(&self) -> &'static str {
        match self {
            ObjectKind::Ordinary => "Object",
            ObjectKind::Array { .. } => "Array",
            ObjectKind::Boolean(_) => "Boolean",
            ObjectKind::Number(_) => "Number",
            ObjectKind::String(_) => "String",
            ObjectKind::Date(_) => "Date",
        }
    }

    /// Wrapper or date: an object whose identity is its wrapped value
    pub fn is_value_object(&self) -> bool {
        matches!(
            self,
            ObjectKind::Boolean(_)
                | ObjectKind::Number(_)
                | ObjectKind::String(_)
                | ObjectKind::Date(_)
        )
    }

    /// The wrapped primitive (`valueOf`); dates report epoch milliseconds
    pub fn primitive_value(&self) -> Option<Value> {
        match self {
            ObjectKind::Ordinary | ObjectKind::Array { .. } => None,
            ObjectKind::Boolean(b) => Some(Value::Boolean(*b)),
            ObjectKind::Number(n) => Some(Value::Number(*n)),
            ObjectKind::String(s) => Some(Value::String(s.clone())),
            #[allow(clippy::cast_precision_loss)]
            ObjectKind::Date(at) => Some(Value::from(at.timestamp_millis() as f64)),
        }
    }
}

pub(crate) struct Object {
    id: ObjectId,
    prototype: Option<ObjectRef>,
    kind: ObjectKind,
    properties: BTreeMap<PropertyKey, PropertyDescriptor>,
}

fn is_length(key: &PropertyKey) -> bool {
    matches!(key, PropertyKey::String(s) if s == LENGTH)
}

fn array_length(value: &Value) -> Result<u32> {
    let n = value
        .as_f64()
        .ok_or_else(|| ObjectError::InvalidArrayLength(value.to_string()))?;
    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return Err(ObjectError::InvalidArrayLength(value.to_string()));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let length = n as u32;
    Ok(length)
}

impl Object {
    fn own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        if let ObjectKind::Array { length } = self.kind {
            if is_length(key) {
                return Some(PropertyDescriptor::hidden(length).with_configurable(false));
            }
        }
        self.properties.get(key).cloned()
    }

    /// Write to storage, keeping an array's length in step with its indices
    fn store(&mut self, key: PropertyKey, descriptor: PropertyDescriptor) -> Result<()> {
        if let ObjectKind::Array { length } = &mut self.kind {
            if is_length(&key) {
                // Only the value of `length` can change
                if !descriptor.writable || descriptor.enumerable || descriptor.configurable {
                    return Err(ObjectError::NonConfigurable(key));
                }
                let new_length = array_length(&descriptor.value)?;
                if new_length < *length {
                    self.properties
                        .retain(|k, _| k.as_index().map_or(true, |i| i < new_length));
                }
                *length = new_length;
                return Ok(());
            }
            if let Some(index) = key.as_index() {
                if index >= *length {
                    if let Some(new_length) = index.checked_add(1) {
                        *length = new_length;
                    }
                }
            }
        }
        self.properties.insert(key, descriptor);
        Ok(())
    }
}

/// Shared, mutable handle to an object
///
/// Cloning the handle aliases the object; it does not duplicate it. See
/// [`crate::clone()`] and [`crate::copy()`] for duplication.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<Object>>);

impl ObjectRef {
    /// Allocate an object with the given kind and prototype
    ///
    /// No constructor runs; the object starts with no own properties.
    pub fn new(kind: ObjectKind, prototype: Option<ObjectRef>) -> Self {
        Self(Rc::new(RefCell::new(Object {
            id: ObjectId::new(),
            prototype,
            kind,
            properties: BTreeMap::new(),
        })))
    }

    /// Allocate a plain object with the given prototype
    pub fn ordinary(prototype: Option<ObjectRef>) -> Self {
        Self::new(ObjectKind::Ordinary, prototype)
    }

    pub fn id(&self) -> ObjectId {
        self.0.borrow().id
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn kind(&self) -> ObjectKind {
        self.0.borrow().kind.clone()
    }

    pub fn class_tag(&self) -> &'static str {
        self.0.borrow().kind.class_tag()
    }

    pub fn primitive_value(&self) -> Option<Value> {
        self.0.borrow().kind.primitive_value()
    }

    pub fn prototype(&self) -> Option<ObjectRef> {
        self.0.borrow().prototype.clone()
    }

    /// Replace the prototype, refusing to create a cycle
    pub fn set_prototype(&self, prototype: Option<ObjectRef>) -> Result<()> {
        if let Some(proto) = &prototype {
            if proto.ptr_eq(self) || self.is_prototype_of(proto) {
                return Err(ObjectError::PrototypeCycle(self.id()));
            }
        }
        tracing::trace!("Rewired prototype of object {}", self.id());
        self.0.borrow_mut().prototype = prototype;
        Ok(())
    }

    /// True when `self` appears on the prototype chain of `other`
    pub fn is_prototype_of(&self, other: &ObjectRef) -> bool {
        let mut current = other.prototype();
        while let Some(proto) = current {
            if proto.ptr_eq(self) {
                return true;
            }
            current = proto.prototype();
        }
        false
    }

    /// Own property descriptor, read straight from storage
    pub fn get_own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        self.0.borrow().own_property(key)
    }

    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.get_own_property(key).is_some()
    }

    /// Own or inherited
    pub fn has_property(&self, key: &PropertyKey) -> bool {
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            if obj.has_own_property(key) {
                return true;
            }
            current = obj.prototype();
        }
        false
    }

    /// Read a property, consulting the prototype chain on a miss
    ///
    /// The chain is walked on every call, so later changes to a prototype
    /// are visible immediately.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        let key = key.into();
        let mut current = Some(self.clone());
        while let Some(obj) = current {
            let inner = obj.0.borrow();
            if let Some(found) = inner.own_property(&key) {
                return found.value;
            }
            current = inner.prototype.clone();
        }
        Value::Undefined
    }

    /// Assign a property on the receiver
    ///
    /// Creates or overwrites an own property; a prototype is never mutated.
    /// Returns `false` when the own or inherited property is read-only.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> bool {
        let key = key.into();
        let value = value.into();

        if let Some(existing) = self.get_own_property(&key) {
            if !existing.writable {
                return false;
            }
            let updated = PropertyDescriptor { value, ..existing };
            return self.0.borrow_mut().store(key, updated).is_ok();
        }

        let mut current = self.prototype();
        while let Some(proto) = current {
            let inner = proto.0.borrow();
            if let Some(inherited) = inner.own_property(&key) {
                if !inherited.writable {
                    return false;
                }
                break;
            }
            current = inner.prototype.clone();
        }

        self.0
            .borrow_mut()
            .store(key, PropertyDescriptor::data(value))
            .is_ok()
    }

    /// Install a property with explicit attributes
    pub fn define_property(
        &self,
        key: impl Into<PropertyKey>,
        descriptor: PropertyDescriptor,
    ) -> Result<()> {
        let key = key.into();
        let mut inner = self.0.borrow_mut();

        if let Some(existing) = inner.own_property(&key) {
            if !existing.configurable {
                // Only a writable value may change, or be made read-only
                let allowed = !descriptor.configurable
                    && descriptor.enumerable == existing.enumerable
                    && (existing.writable
                        || (!descriptor.writable && descriptor.value == existing.value));
                if !allowed {
                    return Err(ObjectError::NonConfigurable(key));
                }
            }
        }

        inner.store(key, descriptor)
    }

    /// Remove an own property
    ///
    /// Absent keys succeed without touching the prototype chain;
    /// non-configurable properties are kept and `false` is returned.
    pub fn delete(&self, key: impl Into<PropertyKey>) -> bool {
        let key = key.into();
        let mut inner = self.0.borrow_mut();
        match inner.own_property(&key) {
            None => true,
            Some(existing) if !existing.configurable => false,
            Some(_) => {
                inner.properties.remove(&key);
                true
            }
        }
    }

    /// Own keys with their enumerable flag, in key order
    pub(crate) fn storage_keys(&self) -> Vec<(PropertyKey, bool)> {
        let inner = self.0.borrow();
        let mut keys: Vec<(PropertyKey, bool)> = inner
            .properties
            .iter()
            .map(|(key, descriptor)| (key.clone(), descriptor.enumerable))
            .collect();
        if matches!(inner.kind, ObjectKind::Array { .. }) {
            keys.push((PropertyKey::String(LENGTH.to_string()), false));
            keys.sort_by(|a, b| a.0.cmp(&b.0));
        }
        keys
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(inner) => f
                .debug_struct("Object")
                .field("id", &inner.id)
                .field("kind", &inner.kind)
                .field("keys", &inner.properties.keys().collect::<Vec<_>>())
                .finish(),
            Err(_) => write!(f, "Object(<borrowed>)"),
        }
    }
}
