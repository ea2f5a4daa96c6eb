//! Error types for VRPLIB parsing and writing

use thiserror::Error;

/// Result type for VRPLIB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during VRPLIB operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Specification line without a `:` separator
    #[error("Malformed specification line: {line}")]
    MalformedSpecification { line: String },

    /// Section whose data rows cannot form a typed array
    #[error("Malformed section '{section}': {reason}")]
    MalformedSection { section: String, reason: String },

    /// Edge weight format with no structural parsing rule
    #[error("Unsupported edge weight format: {format}")]
    UnsupportedFormat { format: String },

    /// Typed conversion applied to a value of a different kind
    #[error("Expected {expected} value, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
