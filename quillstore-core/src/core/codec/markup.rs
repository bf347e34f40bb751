//! The nested markup codec: a YAML-like indented text representation.
//!
//! Encoding is total — any value renders, scalars as bare literal text,
//! objects as `key: ` entries, arrays as `- ` items, nested structures on
//! following lines indented by two spaces per level.
//!
//! Decoding is intentionally partial: it accepts only a flat sequence of
//! `key: value` lines, skipping blanks and `#` comments, and types every
//! value as a string. The format exists primarily as an export target for
//! human consumption; round-trip import covers the common flat-document
//! case only. Do not widen the decoder without re-deriving the grammar —
//! the asymmetry is a documented contract, not an oversight.

use crate::core::value::{scalar_text, Map, Value};

fn encode_value(value: &Value, indent: usize) -> String {
    if let Some(text) = scalar_text(value) {
        return format!("{text}\n");
    }
    let spaces = " ".repeat(indent);
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return "[]\n".to_string();
            }
            let mut out = String::new();
            for item in items {
                out.push_str(&spaces);
                out.push_str("- ");
                match scalar_text(item) {
                    Some(text) => {
                        out.push_str(&text);
                        out.push('\n');
                    }
                    None => {
                        out.push('\n');
                        out.push_str(&encode_value(item, indent + 2));
                    }
                }
            }
            out
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}\n".to_string();
            }
            let mut out = String::new();
            for (key, entry) in map {
                out.push_str(&spaces);
                out.push_str(key);
                out.push_str(": ");
                match scalar_text(entry) {
                    Some(text) => {
                        out.push_str(&text);
                        out.push('\n');
                    }
                    None => {
                        out.push('\n');
                        out.push_str(&encode_value(entry, indent + 2));
                    }
                }
            }
            out
        }
        // Scalars were handled above.
        _ => String::new(),
    }
}

/// Renders any value as nested markup text.
pub fn encode(value: &Value) -> String {
    encode_value(value, 0)
}

/// Decodes a flat `key: value` document into an object of string values.
///
/// Lines without a colon are skipped, so feeding rich encoded output back
/// in loses structure but never fails: the result is always some flat
/// object.
pub fn decode(text: &str) -> Value {
    let mut map = Map::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, rest)) = trimmed.split_once(':') {
            map.insert(
                key.trim().to_string(),
                Value::String(rest.trim().to_string()),
            );
        }
    }
    Value::Object(map)
}
