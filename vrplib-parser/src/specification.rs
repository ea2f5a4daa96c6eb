//! Specification line parsing

use crate::error::{Error, Result};
use crate::value::Value;
use tracing::warn;

/// Parse one `KEY : value` specification line
///
/// The line is split at the first `:` only, so values may themselves contain
/// colons. The key is trimmed and lower-cased, the value is trimmed and then
/// typed by scalar inference.
pub(crate) fn parse_specification(line: &str) -> Result<(String, Value)> {
    let Some((key, value)) = line.split_once(':') else {
        warn!("Cannot parse specification line: {line:?}");
        return Err(Error::MalformedSpecification {
            line: line.to_string(),
        });
    };

    Ok((key.trim().to_lowercase(), Value::infer(value.trim())))
}
