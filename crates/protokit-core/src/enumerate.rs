//! Own-key enumeration
//!
//! Keys are read from the object's storage. Nothing is looked up on the
//! object or its prototypes, so an object that shadows `hasOwnProperty`
//! (or anything else) cannot change what gets listed.

use crate::object::ObjectRef;
use crate::property::PropertyKey;
use serde::{Deserialize, Serialize};

/// Which own keys an enumeration reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enumeration {
    /// Enumerable and non-enumerable keys
    #[default]
    All,

    /// Enumerable keys only; non-enumerable properties are skipped silently
    EnumerableOnly,
}

/// Every own key, including non-enumerable ones
pub fn own_keys(obj: &ObjectRef) -> Vec<PropertyKey> {
    own_keys_with(obj, Enumeration::All)
}

/// Own keys visible to default iteration
pub fn enumerable_own_keys(obj: &ObjectRef) -> Vec<PropertyKey> {
    own_keys_with(obj, Enumeration::EnumerableOnly)
}

pub fn own_keys_with(obj: &ObjectRef, mode: Enumeration) -> Vec<PropertyKey> {
    obj.storage_keys()
        .into_iter()
        .filter(|(_, enumerable)| mode == Enumeration::All || *enumerable)
        .map(|(key, _)| key)
        .collect()
}
