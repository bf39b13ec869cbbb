//! Tests for independent shallow copy

use chrono::{TimeZone, Utc};
use protokit_core::{
    copy, deep_equal, msg, Class, Function, ObjectError, ObjectRef, PropertyDescriptor,
    PropertyKey, Realm, Value,
};

/// `Animal(a)` and `Dog(a, b)`, with `Dog` deriving from `Animal`
fn animal_and_dog(realm: &Realm) -> (Class, Class) {
    let animal = realm.define_class(
        "Animal",
        None,
        Function::new("Animal", |this, args| {
            let obj = this
                .as_object()
                .ok_or_else(|| ObjectError::thrown("Animal needs an object receiver"))?;
            obj.set("a", args.first().cloned().unwrap_or_default());
            Ok(Value::Undefined)
        }),
    );

    let parent = animal.clone();
    let dog = realm.define_class(
        "Dog",
        Some(&animal),
        Function::new("Dog", move |this, args| {
            parent.initialize(this, &args[..args.len().min(1)])?;
            let obj = this
                .as_object()
                .ok_or_else(|| ObjectError::thrown("Dog needs an object receiver"))?;
            obj.set("b", args.get(1).cloned().unwrap_or_default());
            Ok(Value::Undefined)
        }),
    );

    (animal, dog)
}

fn copied(obj: &ObjectRef) -> ObjectRef {
    match copy(&Value::from(obj)) {
        Value::Object(copy) => copy,
        other => panic!("Expected object, got {other}"),
    }
}

#[test]
fn test_copy_passes_non_objects_through() {
    let f = Function::new("d", |_, _| Ok(Value::Undefined));
    let values = [
        Value::from(1),
        Value::from("b"),
        Value::from(true),
        Value::from(f),
        Value::Undefined,
    ];
    for value in values {
        assert_eq!(copy(&value), value);
    }
}

#[test]
fn test_copy_returns_null_for_null() {
    assert_eq!(copy(&Value::Null), Value::Null);
}

#[test]
fn test_copy_primitive_wrappers() {
    let realm = Realm::default();
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
    let wrappers = [
        realm.new_number(123.0),
        realm.new_string("abc"),
        realm.new_boolean(true),
        realm.new_date(at),
    ];

    for wrapper in wrappers {
        let source = Value::from(&wrapper);
        let result = copy(&source);
        assert_ne!(result, source);
        assert!(deep_equal(&result, &source));
        assert_eq!(
            result.as_object().unwrap().primitive_value(),
            wrapper.primitive_value()
        );
    }
}

#[test]
fn test_copy_plain_object_properties() {
    let realm = Realm::default();
    let original = realm.object_from([("a", "A"), ("b", "B")]);
    let copy = copied(&original);

    assert!(!copy.ptr_eq(&original));
    assert_eq!(copy.get("a"), Value::from("A"));
    assert_eq!(copy.get("b"), Value::from("B"));
}

#[test]
fn test_changes_to_original_not_visible_in_copy() {
    let realm = Realm::default();
    let original = realm.object_from([("a", "A"), ("b", "B")]);
    let copy = copied(&original);

    original.set("b", "Banana");
    assert_eq!(original.get("b"), Value::from("Banana"));
    assert_eq!(copy.get("b"), Value::from("B"));

    copy.set("a", "Apple");
    assert_eq!(original.get("a"), Value::from("A"));
}

#[test]
fn test_own_property_sets_are_independent() {
    let realm = Realm::default();
    let original = realm.object_from([("a", "A")]);
    let copy = copied(&original);

    original.set("x", 1);
    assert!(copy.delete("a"));
    assert_eq!(copy.get("x"), Value::Undefined);
    assert_eq!(original.get("a"), Value::from("A"));
}

#[test]
fn test_shallow_copy_of_plain_object() {
    let realm = Realm::default();
    let nested = realm.object_from([("c", "C")]);
    let original = realm.object_from([("a", Value::from("A")), ("b", Value::from(&nested))]);
    let copy = copied(&original);

    nested.set("c", "Car");
    let shared = copy.get("b");
    assert_eq!(shared, Value::from(&nested));
    assert_eq!(shared.as_object().unwrap().get("c"), Value::from("Car"));
}

#[test]
fn test_copy_non_enumerable_properties_of_plain_object() {
    let realm = Realm::default();
    let original = realm.object_from([("a", "A")]);
    original
        .define_property("b", PropertyDescriptor::hidden("B"))
        .unwrap();
    let copy = copied(&original);

    assert_eq!(original.get("b"), Value::from("B"));
    assert_eq!(copy.get("b"), Value::from("B"));
    assert_eq!(
        copy.get_own_property(&PropertyKey::from("b")),
        original.get_own_property(&PropertyKey::from("b"))
    );
}

#[test]
fn test_copy_non_enumerable_properties_of_class_instance() -> anyhow::Result<()> {
    let realm = Realm::default();
    let (_, dog) = animal_and_dog(&realm);
    let original = dog.construct(&[Value::from("A"), Value::from("B")])?;
    original.define_property("c", PropertyDescriptor::hidden("C"))?;
    let copy = copied(&original);

    assert_eq!(original.get("c"), Value::from("C"));
    assert_eq!(copy.get("c"), Value::from("C"));
    Ok(())
}

#[test]
fn test_shallow_copy_of_class_instance() -> anyhow::Result<()> {
    let realm = Realm::default();
    let (_, dog) = animal_and_dog(&realm);
    let nested = realm.object_from([("c", "C")]);
    let original = dog.construct(&[Value::from("A"), Value::from(&nested)])?;
    let copy = copied(&original);

    original.get("b").as_object().unwrap().set("c", "Car");
    assert_eq!(copy.get("b").as_object().unwrap().get("c"), Value::from("Car"));
    Ok(())
}

#[test]
fn test_copy_user_defined_class() -> anyhow::Result<()> {
    let realm = Realm::default();
    let (animal, dog) = animal_and_dog(&realm);
    let original = dog.construct(&[Value::from("A"), Value::from("B")])?;
    let copy = copied(&original);

    original.set("a", "AA");
    assert!(!copy.ptr_eq(&original));
    assert_eq!(copy.get("a"), Value::from("A"));
    assert_eq!(copy.get("b"), Value::from("B"));
    assert!(Value::from(&copy).instance_of(&dog));
    assert!(Value::from(&copy).instance_of(&animal));
    Ok(())
}

#[test]
fn test_copy_object_overriding_has_own_property() -> anyhow::Result<()> {
    let realm = Realm::default();
    let (animal, dog) = animal_and_dog(&realm);
    let original = dog.construct(&[Value::from("A"), Value::from("B")])?;
    original.set(
        "hasOwnProperty",
        Function::new("hasOwnProperty", |_, _| Ok(Value::from(false))),
    );

    // The override fools anyone asking the object itself
    assert_eq!(original.send(&msg!(hasOwnProperty("a")))?, Value::from(false));

    let copy = copied(&original);
    original.set("a", "AA");
    assert!(!copy.ptr_eq(&original));
    assert_eq!(copy.get("a"), Value::from("A"));
    assert_eq!(copy.get("b"), Value::from("B"));
    assert!(Value::from(&copy).instance_of(&dog));
    assert!(Value::from(&copy).instance_of(&animal));
    Ok(())
}

#[test]
fn test_copy_preserves_attributes() -> anyhow::Result<()> {
    let realm = Realm::default();
    let original = realm.new_object();
    original.define_property(
        "frozen",
        PropertyDescriptor::data(1)
            .with_writable(false)
            .with_configurable(false),
    )?;
    let copy = copied(&original);

    assert!(!copy.set("frozen", 2));
    assert!(!copy.delete("frozen"));
    assert_eq!(copy.get("frozen"), Value::from(1));
    Ok(())
}

#[test]
fn test_copy_array() {
    let realm = Realm::default();
    let nested = realm.new_object();
    let original = realm.new_array(vec![Value::from(1), Value::from(&nested)]);
    let copy = copied(&original);

    assert_eq!(copy.class_tag(), "Array");
    assert_eq!(copy.get("length"), Value::from(2));
    assert_eq!(copy.get(1u32), Value::from(&nested));

    original.set(2u32, "pushed");
    assert_eq!(copy.get("length"), Value::from(2));

    let expected = realm.new_array(vec![Value::from(1), Value::from(&nested)]);
    assert!(deep_equal(&Value::from(&copy), &Value::from(&expected)));
}

#[test]
fn test_copy_is_deep_equal_to_source() {
    let realm = Realm::default();
    let original = realm.object_from([("a", "A"), ("b", "B")]);
    let copy = copy(&Value::from(&original));

    assert_ne!(copy, Value::from(&original));
    assert!(deep_equal(&copy, &Value::from(&original)));
}
