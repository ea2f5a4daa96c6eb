//! VRPLIB instance parser
//!
//! Splits instance text into a specification block and section blocks, then
//! delegates line parsing to the specification and section modules.

use crate::error::Result;
use crate::instance::Instance;
use crate::section;
use crate::specification;
use tracing::debug;

/// End-of-instance marker; this line and everything after it is ignored
const EOF_MARKER: &str = "EOF";

/// One section block: its header line and the data rows that follow it
struct SectionBlock<'a> {
    header: &'a str,
    rows: Vec<&'a str>,
}

/// Parser for VRPLIB instance text
pub struct VrplibParser;

impl VrplibParser {
    /// Parse a complete VRPLIB instance
    ///
    /// # Examples
    ///
    /// ```
    /// use vrplib_parser::VrplibParser;
    ///
    /// let text = "NAME : VRPLIB\n\
    ///             EDGE_WEIGHT_TYPE : EXPLICIT\n\
    ///             EDGE_WEIGHT_FORMAT : FULL_MATRIX\n\
    ///             EDGE_WEIGHT_SECTION\n\
    ///             0 1\n\
    ///             1 0\n\
    ///             EOF\n";
    ///
    /// let instance = VrplibParser::parse(text)?;
    /// assert_eq!(instance.get_text("name"), Some("VRPLIB"));
    /// assert_eq!(
    ///     instance.get("edge_weight").and_then(|v| v.as_int_matrix()),
    ///     Some(&[vec![0, 1], vec![1, 0]][..])
    /// );
    /// # Ok::<(), vrplib_parser::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Instance> {
        let lines = instance_lines(text);
        let (spec_lines, blocks) = group_lines(&lines);
        debug!(
            "Grouped {} specification lines and {} section blocks",
            spec_lines.len(),
            blocks.len()
        );

        let mut instance = Instance::new();
        for line in spec_lines {
            let (key, value) = specification::parse_specification(line)?;
            instance.insert(key, value);
        }
        for block in &blocks {
            let (name, value) = section::parse_section(block.header, &block.rows, &instance)?;
            instance.insert(name, value);
        }

        Ok(instance)
    }

    /// Parse only the specification block, skipping all data sections
    ///
    /// Useful for inspecting instance metadata without paying for section
    /// parsing; section rows are never validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use vrplib_parser::VrplibParser;
    ///
    /// let text = "NAME : big\nDIMENSION : 1001\nDEMAND_SECTION\n1 5\nEOF\n";
    ///
    /// let instance = VrplibParser::parse_specifications(text)?;
    /// assert_eq!(instance.get_int("dimension"), Some(1001));
    /// assert!(!instance.contains("demand"));
    /// # Ok::<(), vrplib_parser::Error>(())
    /// ```
    pub fn parse_specifications(text: &str) -> Result<Instance> {
        let lines = instance_lines(text);
        let (spec_lines, _) = group_lines(&lines);

        let mut instance = Instance::new();
        for line in spec_lines {
            let (key, value) = specification::parse_specification(line)?;
            instance.insert(key, value);
        }

        Ok(instance)
    }

    /// Get basic statistics about instance text without parsing any values
    ///
    /// # Examples
    ///
    /// ```
    /// use vrplib_parser::VrplibParser;
    ///
    /// let text = "NAME : tiny\nCAPACITY : 30\nDEMAND_SECTION\n1 5\nEOF\n";
    ///
    /// let (specifications, sections, has_eof) = VrplibParser::get_stats(text);
    /// assert_eq!(specifications, 2);
    /// assert_eq!(sections, 1);
    /// assert!(has_eof);
    /// ```
    pub fn get_stats(text: &str) -> (usize, usize, bool) {
        let has_eof = text.lines().map(str::trim).any(|line| line == EOF_MARKER);
        let lines = instance_lines(text);
        let (spec_lines, blocks) = group_lines(&lines);
        (spec_lines.len(), blocks.len(), has_eof)
    }
}

/// Trimmed, non-empty lines up to (but excluding) the end marker
fn instance_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take_while(|line| *line != EOF_MARKER)
        .collect()
}

/// Check whether a line is a section header
///
/// A header is a single whitespace-delimited token without a `:`. Bare
/// numeric tokens are data rows (depot indices), never headers.
fn is_section_header(line: &str) -> bool {
    if line.contains(':') {
        return false;
    }
    let mut tokens = line.split_whitespace();
    let (Some(token), None) = (tokens.next(), tokens.next()) else {
        return false;
    };
    token.parse::<f64>().is_err()
}

/// Partition lines into the leading specification block and section blocks
///
/// Every line lands in exactly one bucket, in source order: lines before the
/// first header are specifications, each header starts a block that collects
/// the rows up to the next header.
fn group_lines<'a>(lines: &[&'a str]) -> (Vec<&'a str>, Vec<SectionBlock<'a>>) {
    let mut specifications = Vec::new();
    let mut blocks: Vec<SectionBlock> = Vec::new();

    for &line in lines {
        if is_section_header(line) {
            blocks.push(SectionBlock {
                header: line,
                rows: Vec::new(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.rows.push(line);
        } else {
            specifications.push(line);
        }
    }

    (specifications, blocks)
}
