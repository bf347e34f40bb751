//! The structured value model used as the pivot for all format conversions.
//!
//! Documents are represented as [`serde_json::Value`] trees. The crate is
//! built with serde_json's `preserve_order` feature, so object entries keep
//! their insertion order — canonical formatting and tabular header
//! derivation both depend on that.

pub use serde_json::{Map, Value};

/// Returns the literal, unquoted text of a scalar value, or `None` for
/// arrays and objects.
///
/// This is the rendering the markup and tabular encoders share: strings
/// appear without quotes, numbers and booleans as their JSON text, null as
/// `null`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Renders a value as a single tabular cell: scalars as their literal text,
/// nested structures as compact JSON.
pub fn cell_text(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| value.to_string())
}
