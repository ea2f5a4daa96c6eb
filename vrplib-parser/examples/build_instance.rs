//! Instance building example
//!
//! This example demonstrates how to create VRPLIB instances programmatically
//! and write them back to text.

use vrplib_parser::{Error, Instance};

fn main() -> Result<(), Error> {
    println!("=== Instance Building Example ===\n");

    // Example 1: Basic instance creation
    println!("1. Creating a basic CVRP instance...");

    let mut instance = Instance::new();
    instance.insert("name", "built-n3-k1");
    instance.insert("type", "CVRP");
    instance.insert("dimension", 3i64);
    instance.insert("capacity", 100i64);
    instance.insert("demand", vec![0i64, 30, 40]);
    instance.insert("depot", vec![0i64]);

    println!("   ✅ Created instance with {} fields", instance.len());

    println!("\n   Generated VRPLIB:");
    println!("{}", instance.to_vrplib_string());

    // Example 2: Explicit distance matrix
    println!("\n2. Adding an explicit distance matrix...");

    instance.insert("edge_weight_type", "EXPLICIT");
    instance.insert("edge_weight_format", "FULL_MATRIX");
    instance.insert(
        "edge_weight",
        vec![vec![0i64, 4, 6], vec![4, 0, 3], vec![6, 3, 0]],
    );

    let text = instance.to_vrplib_string();
    println!("{text}");

    // Example 3: Values can be replaced in place
    println!("\n3. Replacing a value...");
    let previous = instance.insert("capacity", 120i64);
    println!("   Previous capacity: {previous:?}");
    println!("   New capacity: {:?}", instance.get_int("capacity"));

    // Example 4: Round-trip through text
    println!("\n4. Reparsing the generated text...");
    let reparsed = Instance::parse(&instance.to_vrplib_string())?;
    println!("   Reparsed fields: {}", reparsed.len());
    println!("   Equal to source: {}", reparsed == instance);

    println!("\n✅ All examples completed successfully!");

    Ok(())
}
