//! Basic VRPLIB parsing example
//!
//! This example demonstrates how to parse a VRPLIB instance from a string.

use vrplib_parser::{Error, Instance, VrplibParser};

fn main() -> Result<(), Error> {
    println!("=== Basic VRPLIB Parsing Example ===\n");

    // A small CVRP instance with an explicit distance matrix
    let vrplib_text = "NAME : tiny-n4-k1
COMMENT : four nodes, one vehicle
TYPE : CVRP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_FORMAT : FULL_MATRIX
CAPACITY : 30
EDGE_WEIGHT_SECTION
0 3 5 9
3 0 4 7
5 4 0 2
9 7 2 0
DEMAND_SECTION
1 0
2 5
3 7
4 11
DEPOT_SECTION
1
-1
EOF
";

    // Parse the instance
    println!("1. Parsing VRPLIB instance...");
    let instance = Instance::parse(vrplib_text)?;

    println!("   ✅ Successfully parsed!");
    println!("   📊 Fields: {}", instance.len());

    // Display all fields in source order
    println!("\n2. Fields:");
    for (name, value) in instance.iter() {
        println!("   • {name} ({})", value.kind());
    }

    // Typed access to specification entries
    println!("\n3. Specification values:");
    println!("   Name: {}", instance.get_text("name").unwrap_or("N/A"));
    println!("   Type: {}", instance.get_text("type").unwrap_or("N/A"));
    println!("   Capacity: {:?}", instance.get_int("capacity"));
    println!("   Dimension: {:?}", instance.get_int("dimension"));

    // Section values
    println!("\n4. Section values:");
    if let Some(demands) = instance.get("demand").and_then(|v| v.as_int_array()) {
        println!("   Demands: {demands:?}");
    }
    if let Some(depots) = instance.get("depot").and_then(|v| v.as_int_array()) {
        println!("   Depots (zero-based): {depots:?}");
    }
    if let Some(matrix) = instance.get("edge_weight").and_then(|v| v.as_int_matrix()) {
        println!("   Distance matrix rows: {}", matrix.len());
        for row in matrix {
            println!("      {row:?}");
        }
    }

    // Display statistics using parser utility
    println!("\n5. Instance statistics:");
    let (specifications, sections, has_eof) = VrplibParser::get_stats(vrplib_text);
    println!("   Specifications: {specifications}, Sections: {sections}, Has EOF: {has_eof}");

    // Demonstrate round-trip conversion
    println!("\n6. Round-trip test:");
    let regenerated = instance.to_vrplib_string();
    let reparsed = Instance::parse(&regenerated)?;

    println!("   Original fields: {}", instance.len());
    println!("   Reparsed fields: {}", reparsed.len());
    println!("   Round-trip successful: {}", reparsed == instance);

    println!("\n✅ All examples completed successfully!");

    Ok(())
}
