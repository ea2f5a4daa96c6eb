//! Parsed VRPLIB instance with ordered field access

use crate::error::Result;
use crate::value::{Value, float_token};
use std::collections::HashMap;

/// A parsed VRPLIB instance
///
/// Holds an ordered mapping from normalized (lower-case) field names to
/// typed values. Specification entries keep their source order, followed by
/// section entries in source order. Inserting an existing name replaces the
/// value but keeps the original position.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// All entries in insertion order
    entries: Vec<(String, Value)>,
    /// Map from field name to entry index for fast lookup
    index: HashMap<String, usize>,
}

impl Instance {
    /// Create a new empty instance
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Parse an instance from VRPLIB text
    ///
    /// # Examples
    ///
    /// ```
    /// use vrplib_parser::Instance;
    ///
    /// let text = "NAME : tiny\nCAPACITY : 30\nDEMAND_SECTION\n1 5\n2 7\nEOF\n";
    /// let instance = Instance::parse(text)?;
    ///
    /// assert_eq!(instance.get_text("name"), Some("tiny"));
    /// assert_eq!(instance.get_int("capacity"), Some(30));
    /// assert_eq!(instance.get("demand").and_then(|v| v.as_int_array()), Some(&[5, 7][..]));
    /// # Ok::<(), vrplib_parser::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::VrplibParser::parse(text)
    }

    /// Insert or replace a field, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        if let Some(&position) = self.index.get(&name) {
            let slot = &mut self.entries[position].1;
            Some(std::mem::replace(slot, value))
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
            None
        }
    }

    /// Get a field value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position].1)
    }

    /// Get a mutable field value by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.index
            .get(name)
            .map(|&position| &mut self.entries[position].1)
    }

    /// Check if a field exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the instance has no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all field names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Get a field as text
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// Get a field as an integer
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// Get a field as a float, widening an integer if needed
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Render the instance back to VRPLIB text
    ///
    /// Scalar entries are written first as `KEY : value` specification lines,
    /// container entries follow as `*_SECTION` blocks, and the output ends
    /// with an `EOF` line. Integer depot entries are restored to one-based
    /// rows with a `-1` terminator, edge weight matrices are written without
    /// an index column, and every other container gets a leading one-based
    /// index column. Instances produced by the parser re-parse to an equal
    /// instance as long as no section overrode a specification key.
    ///
    /// # Examples
    ///
    /// ```
    /// use vrplib_parser::Instance;
    ///
    /// let mut instance = Instance::new();
    /// instance.insert("name", "tiny");
    /// instance.insert("capacity", 30i64);
    /// instance.insert("demand", vec![5i64, 7]);
    ///
    /// let text = instance.to_vrplib_string();
    /// assert!(text.starts_with("NAME : tiny"));
    /// assert!(text.ends_with("EOF"));
    ///
    /// let reparsed = Instance::parse(&text)?;
    /// assert_eq!(reparsed, instance);
    /// # Ok::<(), vrplib_parser::Error>(())
    /// ```
    pub fn to_vrplib_string(&self) -> String {
        let mut lines = Vec::new();

        // Specification lines
        for (name, value) in self.iter() {
            if value.is_scalar() {
                lines.push(format!("{} : {value}", name.to_uppercase()));
            }
        }

        // Section blocks
        for (name, value) in self.iter() {
            if !value.is_scalar() {
                section_block(name, value, &mut lines);
            }
        }

        lines.push("EOF".to_string());
        lines.join("\n")
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality compares the name-to-value mapping, not entry order
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

/// Append the section header and data rows for one container entry
fn section_block(name: &str, value: &Value, lines: &mut Vec<String>) {
    lines.push(format!("{}_SECTION", name.to_uppercase()));

    match value {
        Value::IntArray(depots) if name == "depot" => {
            for depot in depots {
                lines.push((depot + 1).to_string());
            }
            lines.push("-1".to_string());
        }
        Value::IntMatrix(rows) if name == "edge_weight" => {
            for row in rows {
                lines.push(tab_join_ints(row));
            }
        }
        Value::FloatMatrix(rows) if name == "edge_weight" => {
            for row in rows {
                lines.push(tab_join_floats(row));
            }
        }
        Value::IntArray(values) => {
            for (i, value) in values.iter().enumerate() {
                lines.push(format!("{}\t{value}", i + 1));
            }
        }
        Value::FloatArray(values) => {
            for (i, value) in values.iter().enumerate() {
                lines.push(format!("{}\t{}", i + 1, float_token(*value)));
            }
        }
        Value::IntMatrix(rows) => {
            for (i, row) in rows.iter().enumerate() {
                lines.push(format!("{}\t{}", i + 1, tab_join_ints(row)));
            }
        }
        Value::FloatMatrix(rows) => {
            for (i, row) in rows.iter().enumerate() {
                lines.push(format!("{}\t{}", i + 1, tab_join_floats(row)));
            }
        }
        Value::Text(_) | Value::Int(_) | Value::Float(_) => {}
    }
}

fn tab_join_ints(row: &[i64]) -> String {
    row.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\t")
}

fn tab_join_floats(row: &[f64]) -> String {
    row.iter()
        .map(|value| float_token(*value))
        .collect::<Vec<_>>()
        .join("\t")
}
