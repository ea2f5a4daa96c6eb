//! VRPLIB value types with type-safe conversions

use crate::error::{Error, Result};
use std::fmt;

/// Represents a typed value in a VRPLIB instance
///
/// Specification entries hold scalars (`Text`, `Int`, `Float`) while data
/// sections produce arrays and matrices. Numeric containers are homogeneous:
/// a section containing any fractional token is promoted to floats as a
/// whole, so mixed integer/float containers never occur.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Free-form text value
    Text(String),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// One-dimensional integer array
    IntArray(Vec<i64>),
    /// One-dimensional float array
    FloatArray(Vec<f64>),
    /// Row-major integer matrix
    IntMatrix(Vec<Vec<i64>>),
    /// Row-major float matrix
    FloatMatrix(Vec<Vec<f64>>),
}

impl Value {
    /// Infer a scalar value from a raw token
    ///
    /// Tries integer first, then float; anything else stays text. The token
    /// is expected to be trimmed already.
    ///
    /// # Examples
    ///
    /// ```
    /// use vrplib_parser::Value;
    ///
    /// assert_eq!(Value::infer("30"), Value::Int(30));
    /// assert_eq!(Value::infer("30.5"), Value::Float(30.5));
    /// assert_eq!(Value::infer("FULL_MATRIX"), Value::Text("FULL_MATRIX".to_string()));
    /// ```
    pub fn infer(token: &str) -> Self {
        if let Ok(int) = token.parse::<i64>() {
            return Self::Int(int);
        }
        if let Ok(float) = token.parse::<f64>() {
            return Self::Float(float);
        }
        Self::Text(token.to_string())
    }

    /// Get the kind of this value as a static name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::IntArray(_) => "IntArray",
            Self::FloatArray(_) => "FloatArray",
            Self::IntMatrix(_) => "IntMatrix",
            Self::FloatMatrix(_) => "FloatMatrix",
        }
    }

    /// Check if this value is a scalar (text, int or float)
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Int(_) | Self::Float(_))
    }

    /// Check if this value is a one-dimensional array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::IntArray(_) | Self::FloatArray(_))
    }

    /// Check if this value is a two-dimensional matrix
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::IntMatrix(_) | Self::FloatMatrix(_))
    }

    /// Get the value as text, if it is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, if it is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a float, widening an integer if needed
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as an integer array slice
    pub fn as_int_array(&self) -> Option<&[i64]> {
        match self {
            Self::IntArray(values) => Some(values),
            _ => None,
        }
    }

    /// Get the value as a float array slice
    pub fn as_float_array(&self) -> Option<&[f64]> {
        match self {
            Self::FloatArray(values) => Some(values),
            _ => None,
        }
    }

    /// Get the value as integer matrix rows
    pub fn as_int_matrix(&self) -> Option<&[Vec<i64>]> {
        match self {
            Self::IntMatrix(rows) => Some(rows),
            _ => None,
        }
    }

    /// Get the value as float matrix rows
    pub fn as_float_matrix(&self) -> Option<&[Vec<f64>]> {
        match self {
            Self::FloatMatrix(rows) => Some(rows),
            _ => None,
        }
    }

    /// Convert to text, consuming self
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to an integer array, consuming self
    pub fn into_int_array(self) -> Option<Vec<i64>> {
        match self {
            Self::IntArray(values) => Some(values),
            _ => None,
        }
    }

    /// Convert to a float array, consuming self
    pub fn into_float_array(self) -> Option<Vec<f64>> {
        match self {
            Self::FloatArray(values) => Some(values),
            _ => None,
        }
    }

    /// Convert to an integer matrix, consuming self
    pub fn into_int_matrix(self) -> Option<Vec<Vec<i64>>> {
        match self {
            Self::IntMatrix(rows) => Some(rows),
            _ => None,
        }
    }

    /// Convert to a float matrix, consuming self
    pub fn into_float_matrix(self) -> Option<Vec<Vec<f64>>> {
        match self {
            Self::FloatMatrix(rows) => Some(rows),
            _ => None,
        }
    }
}

/// Render a float as a VRPLIB token
///
/// Whole-valued finite floats keep one fractional digit so they stay floats
/// on re-parse; everything else uses the shortest round-trip form.
pub(crate) fn float_token(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn join_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|f| float_token(*f))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_ints(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{}", float_token(*v)),
            Self::IntArray(values) => write!(f, "[{}]", join_ints(values)),
            Self::FloatArray(values) => write!(f, "[{}]", join_floats(values)),
            Self::IntMatrix(rows) => {
                let body = rows
                    .iter()
                    .map(|row| format!("[{}]", join_ints(row)))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{body}]")
            }
            Self::FloatMatrix(rows) => {
                let body = rows
                    .iter()
                    .map(|row| format!("[{}]", join_floats(row)))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{body}]")
            }
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Vec<i64>> for Value {
    fn from(values: Vec<i64>) -> Self {
        Self::IntArray(values)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Self::FloatArray(values)
    }
}

impl From<Vec<Vec<i64>>> for Value {
    fn from(rows: Vec<Vec<i64>>) -> Self {
        Self::IntMatrix(rows)
    }
}

impl From<Vec<Vec<f64>>> for Value {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::FloatMatrix(rows)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(Error::KindMismatch {
                expected: "Text",
                found: value.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(i),
            _ => Err(Error::KindMismatch {
                expected: "Int",
                found: value.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Int(i) => Ok(i as f64),
            _ => Err(Error::KindMismatch {
                expected: "Float",
                found: value.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integer() {
        assert_eq!(Value::infer("30"), Value::Int(30));
        assert_eq!(Value::infer("-7"), Value::Int(-7));
        assert_eq!(Value::infer("+42"), Value::Int(42));
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(Value::infer("30.5"), Value::Float(30.5));
        assert_eq!(Value::infer("-0.25"), Value::Float(-0.25));
        assert_eq!(Value::infer("1e3"), Value::Float(1000.0));
    }

    #[test]
    fn test_infer_text() {
        assert_eq!(Value::infer("EXPLICIT"), Value::Text("EXPLICIT".to_string()));
        assert_eq!(
            Value::infer("Antwerp 1 (min no. veh: 25)"),
            Value::Text("Antwerp 1 (min no. veh: 25)".to_string())
        );
        assert_eq!(Value::infer(""), Value::Text(String::new()));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Int(1).kind(), "Int");
        assert_eq!(Value::Float(1.5).kind(), "Float");
        assert_eq!(Value::Text("x".to_string()).kind(), "Text");
        assert_eq!(Value::IntArray(vec![1]).kind(), "IntArray");
        assert_eq!(Value::FloatMatrix(vec![vec![1.0]]).kind(), "FloatMatrix");
    }

    #[test]
    fn test_shape_predicates() {
        assert!(Value::Int(3).is_scalar());
        assert!(!Value::Int(3).is_array());
        assert!(Value::IntArray(vec![1, 2]).is_array());
        assert!(Value::FloatMatrix(vec![vec![1.0]]).is_matrix());
        assert!(!Value::FloatMatrix(vec![vec![1.0]]).is_scalar());
    }

    #[test]
    fn test_accessors() {
        let text = Value::Text("depot".to_string());
        assert_eq!(text.as_text(), Some("depot"));
        assert_eq!(text.as_int(), None);

        let int = Value::Int(99);
        assert_eq!(int.as_int(), Some(99));
        assert_eq!(int.as_f64(), Some(99.0));
        assert_eq!(int.as_float(), None);

        let float = Value::Float(2.5);
        assert_eq!(float.as_float(), Some(2.5));
        assert_eq!(float.as_f64(), Some(2.5));

        let array = Value::IntArray(vec![1, 2, 3]);
        assert_eq!(array.as_int_array(), Some(&[1, 2, 3][..]));
        assert_eq!(array.as_float_array(), None);

        let matrix = Value::IntMatrix(vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(
            matrix.as_int_matrix(),
            Some(&[vec![0, 1], vec![1, 0]][..])
        );
    }

    #[test]
    fn test_into_conversions() {
        assert_eq!(
            Value::Text("hello".to_string()).into_text(),
            Some("hello".to_string())
        );
        assert_eq!(Value::IntArray(vec![5]).into_int_array(), Some(vec![5]));
        assert_eq!(Value::Int(5).into_int_array(), None);
        assert_eq!(
            Value::FloatMatrix(vec![vec![0.5]]).into_float_matrix(),
            Some(vec![vec![0.5]])
        );
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Value::from("text"), Value::Text("text".to_string()));
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from(5i32), Value::Int(5));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from(vec![1i64, 2]), Value::IntArray(vec![1, 2]));
        assert_eq!(
            Value::from(vec![vec![1.5]]),
            Value::FloatMatrix(vec![vec![1.5]])
        );
    }

    #[test]
    fn test_try_from() {
        assert_eq!(String::try_from(Value::Text("a".to_string())), Ok("a".to_string()));
        assert_eq!(i64::try_from(Value::Int(7)), Ok(7));
        assert_eq!(f64::try_from(Value::Float(1.5)), Ok(1.5));
        assert_eq!(f64::try_from(Value::Int(2)), Ok(2.0));

        assert_eq!(
            i64::try_from(Value::Float(1.5)),
            Err(Error::KindMismatch {
                expected: "Int",
                found: "Float",
            })
        );
        assert_eq!(
            String::try_from(Value::Int(1)),
            Err(Error::KindMismatch {
                expected: "Text",
                found: "Int",
            })
        );
    }

    #[test]
    fn test_float_token_keeps_fraction() {
        assert_eq!(float_token(2.0), "2.0");
        assert_eq!(float_token(-3.0), "-3.0");
        assert_eq!(float_token(2.5), "2.5");
        assert_eq!(float_token(0.1), "0.1");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Text("city".to_string()).to_string(), "city");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::IntArray(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(
            Value::FloatMatrix(vec![vec![1.0, 2.5], vec![3.0, 4.0]]).to_string(),
            "[[1.0, 2.5], [3.0, 4.0]]"
        );
    }
}
