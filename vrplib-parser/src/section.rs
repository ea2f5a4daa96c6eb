//! Data section parsing
//!
//! Sections are dispatched on their normalized name: `edge_weight` rows form
//! a dense matrix, `depot` rows form a terminated index list, and every other
//! section is parsed as generic `index value...` rows.

use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::value::Value;
use tracing::warn;

/// The only explicit edge weight layout with a structural parsing rule
const FULL_MATRIX: &str = "FULL_MATRIX";

/// Structural rule applied to a section's data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionRule {
    /// One matrix row of weights per line, no index column
    FullMatrix,
    /// One node index per line, one-based, terminated by `-1`
    DepotList,
    /// One-based index column followed by payload values
    IndexedRows,
}

impl SectionRule {
    fn for_name(name: &str) -> Self {
        match name {
            "edge_weight" => Self::FullMatrix,
            "depot" => Self::DepotList,
            _ => Self::IndexedRows,
        }
    }
}

/// A numeric cell before section-wide type promotion
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    fn parse(token: &str) -> Option<Self> {
        if let Ok(int) = token.parse::<i64>() {
            return Some(Self::Int(int));
        }
        token.parse::<f64>().ok().map(Self::Float)
    }

    fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(int),
            Self::Float(_) => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(int) => int as f64,
            Self::Float(float) => float,
        }
    }
}

/// Strip the conventional `_SECTION` suffix and lower-case the header
pub(crate) fn normalize_name(header: &str) -> String {
    let lower = header.to_lowercase();
    match lower.strip_suffix("_section") {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

/// Parse one section block into a named, typed value
///
/// `instance` carries the entries parsed so far; the edge weight rule
/// consults it for `edge_weight_format`.
pub(crate) fn parse_section(
    header: &str,
    rows: &[&str],
    instance: &Instance,
) -> Result<(String, Value)> {
    let name = normalize_name(header);
    if rows.is_empty() {
        return Err(Error::MalformedSection {
            section: name,
            reason: "section has no data rows".to_string(),
        });
    }

    let value = match SectionRule::for_name(&name) {
        SectionRule::FullMatrix => parse_full_matrix(&name, rows, instance)?,
        SectionRule::DepotList => parse_depot_rows(&name, rows)?,
        SectionRule::IndexedRows => parse_indexed_rows(&name, rows)?,
    };

    Ok((name, value))
}

/// Parse a dense edge weight matrix, one row per line
fn parse_full_matrix(name: &str, rows: &[&str], instance: &Instance) -> Result<Value> {
    match instance.get("edge_weight_format") {
        Some(Value::Text(format)) if format == FULL_MATRIX => {}
        other => {
            let format = other.map_or_else(|| "<missing>".to_string(), ToString::to_string);
            warn!("Unsupported edge weight format: {format}");
            return Err(Error::UnsupportedFormat { format });
        }
    }

    let grid = parse_grid(name, rows)?;
    Ok(matrix_value(&grid))
}

/// Parse depot rows: one-based indices, shifted to zero-based, `-1` ends the list
fn parse_depot_rows(name: &str, rows: &[&str]) -> Result<Value> {
    let mut depots = Vec::new();

    for row in rows {
        let mut tokens = row.split_whitespace();
        let (Some(token), None) = (tokens.next(), tokens.next()) else {
            return Err(Error::MalformedSection {
                section: name.to_string(),
                reason: format!("expected one depot index per row, found {row:?}"),
            });
        };
        let index: i64 = token.parse().map_err(|_| Error::MalformedSection {
            section: name.to_string(),
            reason: format!("non-integer depot index {token:?}"),
        })?;
        if index == -1 {
            break;
        }
        depots.push(index - 1);
    }

    Ok(Value::IntArray(depots))
}

/// Parse generic `index value...` rows, discarding the index column
///
/// Two-column sections become one-dimensional arrays, wider sections become
/// row-major matrices.
fn parse_indexed_rows(name: &str, rows: &[&str]) -> Result<Value> {
    let grid = parse_grid(name, rows)?;
    let width = grid.first().map_or(0, Vec::len);

    match width {
        0 | 1 => Err(Error::MalformedSection {
            section: name.to_string(),
            reason: "expected an index column followed by at least one value".to_string(),
        }),
        2 => {
            let cells: Vec<Numeric> = grid.iter().map(|row| row[1]).collect();
            Ok(array_value(&cells))
        }
        _ => {
            let trimmed: Vec<Vec<Numeric>> = grid.iter().map(|row| row[1..].to_vec()).collect();
            Ok(matrix_value(&trimmed))
        }
    }
}

/// Tokenize rows into a rectangular numeric grid
fn parse_grid(name: &str, rows: &[&str]) -> Result<Vec<Vec<Numeric>>> {
    let mut grid = Vec::with_capacity(rows.len());
    let mut width = None;

    for row in rows {
        let mut cells = Vec::new();
        for token in row.split_whitespace() {
            let cell = Numeric::parse(token).ok_or_else(|| Error::MalformedSection {
                section: name.to_string(),
                reason: format!("non-numeric token {token:?}"),
            })?;
            cells.push(cell);
        }

        match width {
            None => width = Some(cells.len()),
            Some(expected) if expected != cells.len() => {
                return Err(Error::MalformedSection {
                    section: name.to_string(),
                    reason: format!(
                        "ragged rows: expected {expected} columns, found {}",
                        cells.len()
                    ),
                });
            }
            Some(_) => {}
        }

        grid.push(cells);
    }

    Ok(grid)
}

/// Build a one-dimensional value, promoting to floats if any cell is fractional
fn array_value(cells: &[Numeric]) -> Value {
    match cells.iter().map(|cell| cell.as_int()).collect::<Option<Vec<_>>>() {
        Some(ints) => Value::IntArray(ints),
        None => Value::FloatArray(cells.iter().map(|cell| cell.as_f64()).collect()),
    }
}

/// Build a two-dimensional value, promoting to floats if any cell is fractional
fn matrix_value(grid: &[Vec<Numeric>]) -> Value {
    let ints: Option<Vec<Vec<i64>>> = grid
        .iter()
        .map(|row| row.iter().map(|cell| cell.as_int()).collect())
        .collect();

    match ints {
        Some(rows) => Value::IntMatrix(rows),
        None => Value::FloatMatrix(
            grid.iter()
                .map(|row| row.iter().map(|cell| cell.as_f64()).collect())
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(header: &str, rows: &[&str]) -> Result<(String, Value)> {
        parse_section(header, rows, &Instance::new())
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("DEMAND_SECTION"), "demand");
        assert_eq!(normalize_name("EDGE_WEIGHT_SECTION"), "edge_weight");
        assert_eq!(normalize_name("Time_Window_Section"), "time_window");
        assert_eq!(normalize_name("DEPOTS"), "depots");
    }

    #[test]
    fn test_two_column_section_drops_index() {
        let (name, value) = parse("SERVICE_TIME_SECTION", &["1 2", "2 3", "3 100"]).unwrap();
        assert_eq!(name, "service_time");
        assert_eq!(value, Value::IntArray(vec![2, 3, 100]));
    }

    #[test]
    fn test_wide_section_becomes_matrix() {
        let (name, value) = parse("TIME_WINDOW_SECTION", &["1 2 3", "2 1 2"]).unwrap();
        assert_eq!(name, "time_window");
        assert_eq!(value, Value::IntMatrix(vec![vec![2, 3], vec![1, 2]]));
    }

    #[test]
    fn test_tab_separated_rows() {
        let (_, value) = parse("DEMAND_SECTION", &["1\t5", "2\t7"]).unwrap();
        assert_eq!(value, Value::IntArray(vec![5, 7]));
    }

    #[test]
    fn test_negative_values_kept() {
        let (_, value) = parse("UNKNOWN_SECTION", &["1 1", "2 -1"]).unwrap();
        assert_eq!(value, Value::IntArray(vec![1, -1]));
    }

    #[test]
    fn test_array_float_promotion() {
        let (_, value) = parse("DEMAND_SECTION", &["1 1.1", "2 2.2", "3 3.3"]).unwrap();
        assert_eq!(value, Value::FloatArray(vec![1.1, 2.2, 3.3]));
    }

    #[test]
    fn test_single_fractional_cell_promotes_whole_matrix() {
        let (_, value) = parse("NODE_COORD_SECTION", &["1 10 20", "2 30 40.5"]).unwrap();
        assert_eq!(
            value,
            Value::FloatMatrix(vec![vec![10.0, 20.0], vec![30.0, 40.5]])
        );
    }

    #[test]
    fn test_depot_rows() {
        let (name, value) = parse("DEPOT_SECTION", &["1", "-1"]).unwrap();
        assert_eq!(name, "depot");
        assert_eq!(value, Value::IntArray(vec![0]));
    }

    #[test]
    fn test_multiple_depots() {
        let (_, value) = parse("DEPOT_SECTION", &["1", "4", "-1"]).unwrap();
        assert_eq!(value, Value::IntArray(vec![0, 3]));
    }

    #[test]
    fn test_depot_rows_after_terminator_ignored() {
        let (_, value) = parse("DEPOT_SECTION", &["1", "-1", "9"]).unwrap();
        assert_eq!(value, Value::IntArray(vec![0]));
    }

    #[test]
    fn test_depot_without_terminator_consumes_all_rows() {
        let (_, value) = parse("DEPOT_SECTION", &["1", "2"]).unwrap();
        assert_eq!(value, Value::IntArray(vec![0, 1]));
    }

    #[test]
    fn test_depot_rejects_multi_token_rows() {
        let err = parse("DEPOT_SECTION", &["1 2"]).unwrap_err();
        assert!(matches!(err, Error::MalformedSection { section, .. } if section == "depot"));
    }

    #[test]
    fn test_depot_rejects_fractional_index() {
        let err = parse("DEPOT_SECTION", &["1.5"]).unwrap_err();
        assert!(matches!(err, Error::MalformedSection { section, .. } if section == "depot"));
    }

    #[test]
    fn test_full_matrix() {
        let mut instance = Instance::new();
        instance.insert("edge_weight_format", "FULL_MATRIX");

        let (name, value) =
            parse_section("EDGE_WEIGHT_SECTION", &["0 1", "1 0"], &instance).unwrap();
        assert_eq!(name, "edge_weight");
        assert_eq!(value, Value::IntMatrix(vec![vec![0, 1], vec![1, 0]]));
    }

    #[test]
    fn test_full_matrix_float_promotion() {
        let mut instance = Instance::new();
        instance.insert("edge_weight_format", "FULL_MATRIX");

        let (_, value) =
            parse_section("EDGE_WEIGHT_SECTION", &["0 1.5", "1.5 0"], &instance).unwrap();
        assert_eq!(
            value,
            Value::FloatMatrix(vec![vec![0.0, 1.5], vec![1.5, 0.0]])
        );
    }

    #[test]
    fn test_unsupported_edge_weight_format() {
        let mut instance = Instance::new();
        instance.insert("edge_weight_format", "LOWER_ROW");

        let err = parse_section("EDGE_WEIGHT_SECTION", &["0"], &instance).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedFormat {
                format: "LOWER_ROW".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_edge_weight_format() {
        let err = parse("EDGE_WEIGHT_SECTION", &["0 1", "1 0"]).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedFormat {
                format: "<missing>".to_string(),
            }
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = parse("TIME_WINDOW_SECTION", &["1 2 3", "2 1"]).unwrap_err();
        assert!(matches!(err, Error::MalformedSection { section, .. } if section == "time_window"));
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        let err = parse("DEMAND_SECTION", &["1 five"]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedSection { reason, .. } if reason.contains("five")
        ));
    }

    #[test]
    fn test_single_column_generic_section_rejected() {
        let err = parse("DEMAND_SECTION", &["5", "7"]).unwrap_err();
        assert!(matches!(err, Error::MalformedSection { section, .. } if section == "demand"));
    }

    #[test]
    fn test_empty_section_rejected() {
        let err = parse("DEMAND_SECTION", &[]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedSection {
                section: "demand".to_string(),
                reason: "section has no data rows".to_string(),
            }
        );
    }
}
