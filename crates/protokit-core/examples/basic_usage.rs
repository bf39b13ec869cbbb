//! Basic example of cloning and copying objects

use protokit_core::{clone, copy, msg, Function, ObjectError, Realm, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let realm = Realm::default();

    println!("=== Protokit Basic Example ===\n");

    let original = realm.object_from([("a", "A"), ("b", "B")]);

    // Clone delegates to the original
    let cloned = clone(&Value::from(&original));
    let cloned = cloned.as_object().ok_or("clone of an object is an object")?;
    cloned.send(&msg!(a: "Apple"))?;
    original.send(&msg!(b: "Banana"))?;
    println!("clone:    a = {}, b = {}", cloned.get("a"), cloned.get("b"));
    println!("original: a = {}, b = {}", original.get("a"), original.get("b"));

    cloned.send(&msg!(delete a))?;
    println!("clone after delete a: a = {}", cloned.get("a"));

    // Copy is detached from the original
    let copied = copy(&Value::from(&original));
    let copied = copied.as_object().ok_or("copy of an object is an object")?;
    original.send(&msg!(b: "Blueberry"))?;
    println!("\ncopy:     b = {}", copied.get("b"));
    println!("original: b = {}", original.get("b"));

    // Classes survive a copy
    let animal = realm.define_class(
        "Animal",
        None,
        Function::new("Animal", |this, args| {
            let obj = this
                .as_object()
                .ok_or_else(|| ObjectError::thrown("Animal needs an object receiver"))?;
            obj.set("name", args.first().cloned().unwrap_or_default());
            Ok(Value::Undefined)
        }),
    );
    let rex = animal.construct(&[Value::from("Rex")])?;
    let twin = copy(&Value::from(&rex));
    println!(
        "\ncopy of {} is an {}: {}",
        rex.get("name"),
        animal.name(),
        twin.instance_of(&animal)
    );

    Ok(())
}
