//! Typed access example
//!
//! This example demonstrates how to work with typed values in a parsed
//! instance: shape predicates, accessors and conversions.

use vrplib_parser::{Error, Instance, Value};

fn main() -> Result<(), Error> {
    println!("=== Typed Access Example ===\n");

    // Instance with mixed value kinds: text, integers, floats, arrays and
    // matrices with section-wide float promotion
    let vrplib_text = "NAME : typed-demo
TYPE : VRPTW
CAPACITY : 200
BEST_KNOWN : 827.3
NODE_COORD_SECTION
1 40.0 50.0
2 45 68
3 45 70
DEMAND_SECTION
1 0
2 10
3 30
TIME_WINDOW_SECTION
1 0 1236
2 912 967
3 825 870
DEPOT_SECTION
1
-1
EOF
";

    println!("1. Parsing instance with mixed types...");
    let instance = Instance::parse(vrplib_text)?;
    println!("   ✅ Parsed {} fields", instance.len());

    // Inspect every value through the kind system
    println!("\n2. Value kinds:");
    for (name, value) in instance.iter() {
        let shape = if value.is_scalar() {
            "scalar"
        } else if value.is_array() {
            "array"
        } else {
            "matrix"
        };
        println!("   {name} = {value} [{} {shape}]", value.kind());
    }

    // Scalars: typed getters widen integers to floats on demand
    println!("\n3. Scalar access:");
    println!("   capacity as int:   {:?}", instance.get_int("capacity"));
    println!("   capacity as float: {:?}", instance.get_f64("capacity"));
    println!("   best_known:        {:?}", instance.get_f64("best_known"));

    // The coordinate section was promoted to floats because of `40.0`
    println!("\n4. Promoted coordinates:");
    if let Some(coords) = instance.get("node_coord").and_then(|v| v.as_float_matrix()) {
        for (i, row) in coords.iter().enumerate() {
            println!("   node {}: x={}, y={}", i + 1, row[0], row[1]);
        }
    }

    // Pattern matching on the value enum
    println!("\n5. Pattern matching:");
    match instance.get("time_window") {
        Some(Value::IntMatrix(windows)) => {
            for (i, window) in windows.iter().enumerate() {
                println!("   node {} window: [{}, {}]", i + 1, window[0], window[1]);
            }
        }
        Some(other) => println!("   unexpected kind: {}", other.kind()),
        None => println!("   no time windows"),
    }

    // Fallible conversions with TryFrom
    println!("\n6. Conversions:");
    if let Some(value) = instance.get("capacity") {
        let as_float = f64::try_from(value.clone())?;
        println!("   capacity via TryFrom<f64>: {as_float}");
    }
    if let Some(value) = instance.get("name") {
        match i64::try_from(value.clone()) {
            Ok(number) => println!("   name as number: {number}"),
            Err(error) => println!("   name is not numeric: {error}"),
        }
    }

    println!("\n✅ All examples completed successfully!");

    Ok(())
}
