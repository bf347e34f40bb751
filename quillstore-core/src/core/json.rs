//! JSON validation and canonical formatting of document content.
//!
//! The canonical form is the editor's ground truth: insertion-order keys,
//! 2-space indentation, one array element per line, no trailing whitespace.

use crate::core::error::SyntaxError;
use crate::core::value::{Map, Value};

/// The canonical rendering of a blank buffer: an empty-object template the
/// editor drops the caret into. A UX default, not a grammar requirement.
pub const EMPTY_TEMPLATE: &str = "{\n  \n}";

/// Parses `text` against the JSON grammar (RFC 8259).
///
/// An empty or all-whitespace buffer is valid and parses to the empty
/// object. Any grammar violation yields a [`SyntaxError`] carrying the
/// parser's message verbatim.
pub fn parse(text: &str) -> Result<Value, SyntaxError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(text).map_err(SyntaxError::from)
}

/// Serializes a value to canonical text.
pub fn format(value: &Value) -> String {
    // The pretty printer only fails on fallible Serialize impls; Value has none.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Serializes a value on a single line, for non-pretty JSON export.
pub fn format_compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Reformats `text` into canonical form.
///
/// A blank buffer canonicalizes to [`EMPTY_TEMPLATE`] rather than `{}` so
/// the editor presents an open object to type into.
pub fn canonicalize(text: &str) -> Result<String, SyntaxError> {
    if text.trim().is_empty() {
        return Ok(EMPTY_TEMPLATE.to_string());
    }
    Ok(format(&parse(text)?))
}

/// The outcome of validating an editor buffer. Never an error: invalid
/// content is kept verbatim in `formatted` with the message in `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Canonical text when valid, the input untouched when not.
    pub formatted: String,
    /// The parser's message when the buffer is invalid.
    pub error: Option<String>,
}

impl Validation {
    /// True when the buffer parsed and `formatted` is canonical.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validates and canonicalizes an editor buffer.
///
/// This is the per-edit entry point: a syntax error is a state to report,
/// not a failure, and the user's text survives it byte for byte.
pub fn validate(text: &str) -> Validation {
    match canonicalize(text) {
        Ok(formatted) => Validation { formatted, error: None },
        Err(e) => Validation {
            formatted: text.to_string(),
            error: Some(e.to_string()),
        },
    }
}
