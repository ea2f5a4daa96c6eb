//! # vrplib-parser
//!
//! A parser and writer for VRPLIB-format vehicle routing problem instances,
//! the text format used by TSPLIB-style benchmark sets (CVRP, VRPTW and
//! friends).
//!
//! An instance is a block of `KEY : value` specification lines followed by
//! named data sections and an `EOF` marker.
//!
//! ## Format Structure
//!
//! ```text
//! NAME : tiny
//! COMMENT : two customers, one depot
//! EDGE_WEIGHT_TYPE : EXPLICIT
//! EDGE_WEIGHT_FORMAT : FULL_MATRIX
//! CAPACITY : 30
//! EDGE_WEIGHT_SECTION
//! 0 3 5
//! 3 0 4
//! 5 4 0
//! DEMAND_SECTION
//! 1 0
//! 2 5
//! 3 7
//! DEPOT_SECTION
//! 1
//! -1
//! EOF
//! ```
//!
//! ## Quick Start
//!
//! ### Parsing an instance
//!
//! ```rust
//! use vrplib_parser::Instance;
//!
//! let text = "NAME : tiny\nCAPACITY : 30\nDEMAND_SECTION\n1 5\n2 7\nEOF\n";
//!
//! let instance = Instance::parse(text)?;
//! assert_eq!(instance.get_text("name"), Some("tiny"));
//! assert_eq!(instance.get_int("capacity"), Some(30));
//! assert_eq!(instance.get("demand").and_then(|v| v.as_int_array()), Some(&[5, 7][..]));
//! # Ok::<(), vrplib_parser::Error>(())
//! ```
//!
//! ### Writing an instance
//!
//! ```rust
//! use vrplib_parser::Instance;
//!
//! let mut instance = Instance::new();
//! instance.insert("name", "tiny");
//! instance.insert("capacity", 30i64);
//! instance.insert("demand", vec![5i64, 7]);
//! instance.insert("depot", vec![0i64]);
//!
//! let text = instance.to_vrplib_string();
//! assert!(text.ends_with("EOF"));
//! ```

pub mod error;
pub mod instance;
pub mod parser;
pub mod value;

mod section;
mod specification;

pub use error::{Error, Result};
pub use instance::Instance;
pub use parser::VrplibParser;
pub use value::Value;
