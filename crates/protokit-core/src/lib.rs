//! Protokit Core
//!
//! Two ways to duplicate a value of a dynamically-typed object model:
//! - [`clone()`]: a new object that delegates unset reads to the original
//! - [`copy()`]: a new, independent object with the same prototype and a
//!   shallow copy of every own property, hidden ones included
//!
//! plus the object model they operate on: values, objects with prototype
//! chains, property attributes, classes, and a realm of built-ins.

pub mod class;
pub mod clone;
pub mod copy;
pub mod enumerate;
pub mod equality;
pub mod error;
pub mod function;
pub mod message;
pub mod object;
pub mod property;
pub mod realm;
pub mod value;

pub use class::{instance_of, Class};
pub use clone::clone;
pub use copy::{copy, copy_with};
pub use enumerate::{enumerable_own_keys, own_keys, Enumeration};
pub use equality::deep_equal;
pub use error::{ObjectError, Result};
pub use function::Function;
pub use message::Message;
pub use object::{ObjectId, ObjectKind, ObjectRef};
pub use property::{PropertyDescriptor, PropertyKey};
pub use realm::{Realm, RealmConfig};
pub use value::{Symbol, Value};
