//! Line classification of canonical JSON text for presentational
//! highlighting.
//!
//! Works line by line against already-formatted text (one token group per
//! line, as [`crate::core::json::format`] produces); this is regex matching
//! for display, not a re-parse. Lines that do not fit the
//! "optional key, colon, scalar" shape degrade to [`ValueKind::Other`] —
//! absence of a match is a valid outcome, never an error.

use std::sync::OnceLock;

use regex::Regex;

/// The token class of the scalar on a formatted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A quoted string value.
    String,
    /// An integer or decimal number, with optional exponent.
    Number,
    /// The literal `true` or `false`.
    Boolean,
    /// The literal `null`.
    Null,
    /// Anything else: braces, brackets, unmatched text.
    Other,
}

/// One formatted line, split into its presentational parts.
///
/// Borrows from the classified text; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// Leading whitespace, preserved for rendering.
    pub indent: &'a str,
    /// The quoted object key, when the line has one.
    pub key: Option<&'a str>,
    /// Token class of the value portion.
    pub kind: ValueKind,
    /// The value portion, trimmed.
    pub value: &'a str,
}

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^(\s*)(".*?"):"#).unwrap())
}

fn string_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^".*"(,?)$"#).unwrap())
}

fn boolean_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(true|false)(,?)$").unwrap())
}

fn null_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^null(,?)$").unwrap())
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^-?\d+(\.\d+)?(e[+-]?\d+)?(,?)$").unwrap())
}

fn scalar_kind(text: &str) -> ValueKind {
    if string_regex().is_match(text) {
        ValueKind::String
    } else if boolean_regex().is_match(text) {
        ValueKind::Boolean
    } else if null_regex().is_match(text) {
        ValueKind::Null
    } else if number_regex().is_match(text) {
        ValueKind::Number
    } else {
        ValueKind::Other
    }
}

/// Classifies a single formatted line.
pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    if let Some(caps) = key_regex().captures(line) {
        let matched_len = caps.get(0).map_or(0, |m| m.end());
        let value = line[matched_len..].trim();
        return ClassifiedLine {
            indent: caps.get(1).map_or("", |m| m.as_str()),
            key: caps.get(2).map(|m| m.as_str()),
            kind: scalar_kind(value),
            value,
        };
    }
    // Keyless lines: array elements carry a bare scalar, structural lines
    // (braces, brackets) fall through to Other.
    let rest = line.trim_start();
    let indent = &line[..line.len() - rest.len()];
    let value = rest.trim_end();
    ClassifiedLine {
        indent,
        key: None,
        kind: scalar_kind(value),
        value,
    }
}

/// Classifies every line of `text` lazily.
///
/// The returned iterator borrows `text` and can be re-created at will; the
/// classification holds no state between lines.
pub fn classify(text: &str) -> impl Iterator<Item = ClassifiedLine<'_>> {
    text.lines().map(classify_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_scalar_lines() {
        let line = classify_line("  \"name\": \"Ann\",");
        assert_eq!(line.indent, "  ");
        assert_eq!(line.key, Some("\"name\""));
        assert_eq!(line.kind, ValueKind::String);
        assert_eq!(line.value, "\"Ann\",");

        let line = classify_line("  \"age\": 30");
        assert_eq!(line.kind, ValueKind::Number);
        assert_eq!(line.value, "30");

        let line = classify_line("    \"deep\": -1.5e+10,");
        assert_eq!(line.kind, ValueKind::Number);

        let line = classify_line("  \"ok\": true,");
        assert_eq!(line.kind, ValueKind::Boolean);

        let line = classify_line("  \"gone\": null");
        assert_eq!(line.kind, ValueKind::Null);
    }

    #[test]
    fn test_structural_lines_are_other() {
        for raw in ["{", "}", "  },", "  \"nested\": {", "  ["] {
            let line = classify_line(raw);
            assert_eq!(line.kind, ValueKind::Other, "line {raw:?}");
        }
    }

    #[test]
    fn test_keyed_container_opener_keeps_key() {
        let line = classify_line("  \"nested\": {");
        assert_eq!(line.key, Some("\"nested\""));
        assert_eq!(line.kind, ValueKind::Other);
        assert_eq!(line.value, "{");
    }

    #[test]
    fn test_keyless_array_element() {
        let line = classify_line("    \"a\",");
        assert_eq!(line.indent, "    ");
        assert_eq!(line.key, None);
        assert_eq!(line.kind, ValueKind::String);

        let line = classify_line("    42,");
        assert_eq!(line.kind, ValueKind::Number);
    }

    #[test]
    fn test_classify_is_restartable() {
        let text = "{\n  \"a\": 1\n}";
        let first: Vec<_> = classify(text).collect();
        let second: Vec<_> = classify(text).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[1].kind, ValueKind::Number);
    }

    #[test]
    fn test_never_panics_on_garbage() {
        for raw in ["", "   ", "\t\"broken", "::::", "- not json"] {
            let line = classify_line(raw);
            assert_eq!(line.key.is_some(), raw.contains("\":"));
            let _ = line.kind;
        }
    }
}
