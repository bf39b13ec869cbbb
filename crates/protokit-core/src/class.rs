//! User-defined classes
//!
//! A class is a prototype object plus a constructor. Instances are
//! allocated with the class prototype and then initialized by running the
//! constructor with the new object as `this`; subclasses chain to their
//! parent by calling [`Class::initialize`] from their own constructor.

use crate::error::Result;
use crate::function::Function;
use crate::object::ObjectRef;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

struct ClassInner {
    name: String,
    prototype: ObjectRef,
    parent: Option<Class>,
    constructor: Function,
}

/// Handle to a class definition
#[derive(Clone)]
pub struct Class(Rc<ClassInner>);

impl Class {
    /// Define a class whose instances delegate to `prototype`
    ///
    /// `prototype` should already inherit from the parent's prototype;
    /// [`crate::Realm::define_class`] takes care of that.
    pub fn new(
        name: impl Into<String>,
        prototype: ObjectRef,
        parent: Option<Class>,
        constructor: Function,
    ) -> Self {
        Self(Rc::new(ClassInner {
            name: name.into(),
            prototype,
            parent,
            constructor,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Shared prototype of every instance
    pub fn prototype(&self) -> &ObjectRef {
        &self.0.prototype
    }

    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Allocate and initialize a new instance
    pub fn construct(&self, args: &[Value]) -> Result<ObjectRef> {
        let instance = ObjectRef::ordinary(Some(self.0.prototype.clone()));
        self.initialize(&Value::from(&instance), args)?;
        Ok(instance)
    }

    /// Run this class's constructor against an existing receiver
    pub fn initialize(&self, this: &Value, args: &[Value]) -> Result<()> {
        self.0.constructor.call(this, args)?;
        Ok(())
    }

    /// True when this class is `other` or derives from it
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if Rc::ptr_eq(&class.0, &other.0) {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.0.name)
            .field("parent", &self.parent().map(Class::name))
            .finish()
    }
}

/// `value instanceof class`
pub fn instance_of(value: &Value, class: &Class) -> bool {
    value
        .as_object()
        .is_some_and(|obj| class.prototype().is_prototype_of(obj))
}

impl Value {
    /// `self instanceof class`
    pub fn instance_of(&self, class: &Class) -> bool {
        instance_of(self, class)
    }
}
