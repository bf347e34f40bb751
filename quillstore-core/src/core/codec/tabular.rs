//! The tabular codec: CSV-like comma-separated text for an array of
//! same-shaped records.
//!
//! The encoder derives the header from the first element's keys and assumes
//! subsequent elements share them — there is no schema reconciliation. A
//! string cell containing a comma is wrapped in double quotes; embedded
//! quotes are not escaped, and the decoder does not reconstruct quoted
//! fields. Both are documented limitations of a deliberately naive grammar;
//! widening them means re-deriving the format, not patching one side.

use crate::core::error::FormatError;
use crate::core::value::{cell_text, Map, Value};

/// Encodes an array of objects as tabular text.
///
/// # Errors
///
/// [`FormatError::NotTabular`] when the root is not an array of objects,
/// [`FormatError::EmptyTabular`] when the array has no first row to derive
/// a header from.
pub fn encode(value: &Value) -> Result<String, FormatError> {
    let rows = match value {
        Value::Array(rows) => rows,
        _ => return Err(FormatError::NotTabular),
    };
    let first = match rows.first() {
        Some(Value::Object(map)) => map,
        Some(_) => return Err(FormatError::NotTabular),
        None => return Err(FormatError::EmptyTabular),
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let mut out = headers.join(",");
    out.push('\n');

    for row in rows {
        let map = row.as_object().ok_or(FormatError::NotTabular)?;
        let cells: Vec<String> = headers
            .iter()
            .map(|header| match map.get(*header) {
                None => String::new(),
                Some(Value::String(s)) if s.contains(',') => format!("\"{s}\""),
                Some(cell) => cell_text(cell),
            })
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    Ok(out)
}

/// Decodes tabular text into an array of objects with string-typed fields.
///
/// The first line is the header; every subsequent non-blank line is split
/// on commas and mapped positionally. No numeric or boolean inference is
/// performed.
///
/// # Errors
///
/// [`FormatError::RowLength`] when a row's field count differs from the
/// header's. Rows are never padded or truncated.
pub fn decode(text: &str) -> Result<Value, FormatError> {
    let mut lines = text.lines().enumerate();
    let Some((_, header_line)) = lines.next() else {
        return Ok(Value::Array(Vec::new()));
    };
    let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != headers.len() {
            return Err(FormatError::RowLength {
                line: index + 1,
                expected: headers.len(),
                found: fields.len(),
            });
        }
        let mut map = Map::new();
        for (header, field) in headers.iter().zip(&fields) {
            map.insert(header.clone(), Value::String(field.trim().to_string()));
        }
        rows.push(Value::Object(map));
    }
    Ok(Value::Array(rows))
}
