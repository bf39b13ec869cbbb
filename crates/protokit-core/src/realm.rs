//! Realm: intrinsic prototypes, built-in methods and object factories
//!
//! Every object a realm creates inherits from one of its intrinsic
//! prototypes, which all inherit from `Object.prototype`.

use crate::class::Class;
use crate::copy::copy_with;
use crate::enumerate::Enumeration;
use crate::error::{ObjectError, Result};
use crate::function::Function;
use crate::object::{ObjectKind, ObjectRef};
use crate::property::{PropertyDescriptor, PropertyKey};
use crate::value::Value;
use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Configuration for a realm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmConfig {
    /// Key listing used by [`Realm::copy`]
    pub enumeration: Enumeration,

    /// Whether `Object.prototype` gets `hasOwnProperty`, `valueOf`, ...
    pub install_builtins: bool,
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self {
            enumeration: Enumeration::All,
            install_builtins: true,
        }
    }
}

/// A set of intrinsic prototypes plus the config that governs them
pub struct Realm {
    config: RealmConfig,
    object_prototype: ObjectRef,
    array_prototype: ObjectRef,
    boolean_prototype: ObjectRef,
    number_prototype: ObjectRef,
    string_prototype: ObjectRef,
    date_prototype: ObjectRef,
}

impl Realm {
    /// Create a new realm with the given configuration
    pub fn new(config: RealmConfig) -> Self {
        let object_prototype = ObjectRef::ordinary(None);
        let derived = || ObjectRef::ordinary(Some(object_prototype.clone()));

        let realm = Self {
            array_prototype: derived(),
            boolean_prototype: derived(),
            number_prototype: derived(),
            string_prototype: derived(),
            date_prototype: derived(),
            object_prototype,
            config,
        };

        if realm.config.install_builtins {
            install_object_builtins(&realm.object_prototype);
        }
        tracing::debug!(
            "Realm ready (builtins: {}, enumeration: {:?})",
            realm.config.install_builtins,
            realm.config.enumeration
        );
        realm
    }

    pub fn config(&self) -> &RealmConfig {
        &self.config
    }

    /// `Object.prototype`
    pub fn object_prototype(&self) -> &ObjectRef {
        &self.object_prototype
    }

    pub fn array_prototype(&self) -> &ObjectRef {
        &self.array_prototype
    }

    pub fn date_prototype(&self) -> &ObjectRef {
        &self.date_prototype
    }

    /// `{}`
    pub fn new_object(&self) -> ObjectRef {
        ObjectRef::ordinary(Some(self.object_prototype.clone()))
    }

    /// Object literal from key/value pairs
    pub fn object_from<K, V, I>(&self, entries: I) -> ObjectRef
    where
        K: Into<PropertyKey>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let obj = self.new_object();
        for (key, value) in entries {
            obj.set(key, value);
        }
        obj
    }

    /// Array literal
    pub fn new_array<I>(&self, elements: I) -> ObjectRef
    where
        I: IntoIterator<Item = Value>,
    {
        let arr = ObjectRef::new(
            ObjectKind::Array { length: 0 },
            Some(self.array_prototype.clone()),
        );
        for (index, element) in (0u32..).zip(elements) {
            arr.set(index, element);
        }
        arr
    }

    /// `new Boolean(b)`
    pub fn new_boolean(&self, b: bool) -> ObjectRef {
        ObjectRef::new(ObjectKind::Boolean(b), Some(self.boolean_prototype.clone()))
    }

    /// `new Number(n)`
    pub fn new_number(&self, n: f64) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::Number(OrderedFloat(n)),
            Some(self.number_prototype.clone()),
        )
    }

    /// `new String(s)`
    pub fn new_string(&self, s: impl Into<String>) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::String(s.into()),
            Some(self.string_prototype.clone()),
        )
    }

    /// `new Date(at)`
    pub fn new_date(&self, at: DateTime<Utc>) -> ObjectRef {
        ObjectRef::new(ObjectKind::Date(at), Some(self.date_prototype.clone()))
    }

    /// Define a class, optionally deriving from `parent`
    ///
    /// The new prototype inherits from the parent's prototype, or from
    /// `Object.prototype` for a root class.
    pub fn define_class(
        &self,
        name: impl Into<String>,
        parent: Option<&Class>,
        constructor: Function,
    ) -> Class {
        let base = parent.map_or_else(
            || self.object_prototype.clone(),
            |p| p.prototype().clone(),
        );
        let name = name.into();
        tracing::debug!("Defined class {}", name);
        Class::new(
            name,
            ObjectRef::ordinary(Some(base)),
            parent.cloned(),
            constructor,
        )
    }

    /// Shallow copy using this realm's enumeration mode
    pub fn copy(&self, value: &Value) -> Value {
        copy_with(value, self.config.enumeration)
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new(RealmConfig::default())
    }
}

fn receiver_object<'a>(this: &'a Value, method: &str) -> Result<&'a ObjectRef> {
    this.as_object()
        .ok_or_else(|| ObjectError::thrown(format!("{method} called on non-object {this}")))
}

fn key_argument(args: &[Value]) -> PropertyKey {
    PropertyKey::from_value(args.first().unwrap_or(&Value::Undefined))
}

fn install_object_builtins(object_prototype: &ObjectRef) {
    let builtins = [
        Function::new("hasOwnProperty", |this, args| {
            let obj = receiver_object(this, "hasOwnProperty")?;
            Ok(Value::Boolean(obj.has_own_property(&key_argument(args))))
        }),
        Function::new("propertyIsEnumerable", |this, args| {
            let obj = receiver_object(this, "propertyIsEnumerable")?;
            let enumerable = obj
                .get_own_property(&key_argument(args))
                .is_some_and(|descriptor| descriptor.enumerable);
            Ok(Value::Boolean(enumerable))
        }),
        Function::new("valueOf", |this, _| {
            Ok(this
                .as_object()
                .and_then(ObjectRef::primitive_value)
                .unwrap_or_else(|| this.clone()))
        }),
        Function::new("toString", |this, _| {
            let tag = match this {
                Value::Undefined => "Undefined",
                Value::Null => "Null",
                Value::Object(obj) => obj.class_tag(),
                Value::Boolean(_) => "Boolean",
                Value::Number(_) => "Number",
                Value::String(_) => "String",
                Value::Symbol(_) => "Symbol",
                Value::Function(_) => "Function",
            };
            Ok(Value::String(format!("[object {tag}]")))
        }),
    ];

    for builtin in builtins {
        let key = PropertyKey::from(builtin.name());
        // Fresh prototype: nothing to conflict with
        if let Err(err) = object_prototype.define_property(key, PropertyDescriptor::hidden(builtin))
        {
            tracing::warn!("Failed to install builtin: {}", err);
        }
    }
}
