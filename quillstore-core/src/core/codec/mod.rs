//! Format codecs between the value model and external text representations.
//!
//! Formats are not symmetric: the markup and tabular encoders accept any
//! value, while their decoders parse restricted flat grammars. Encode and
//! decode are therefore separate entry points, each free to refuse with a
//! typed error, rather than halves of an assumed-symmetric pair.

pub mod markup;
pub mod tabular;

use std::path::Path;

use crate::core::error::FormatError;
use crate::core::json;
use crate::core::value::Value;

/// External representations a document can be converted to or from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Canonical JSON text.
    Json,
    /// YAML-like nested markup; only the flat subset decodes.
    Markup,
    /// CSV-like comma-separated records.
    Tabular,
    /// Byte-for-byte passthrough of the document text.
    PlainText,
}

impl Format {
    /// The canonical file extension, including the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => ".json",
            Format::Markup => ".yaml",
            Format::Tabular => ".csv",
            Format::PlainText => ".txt",
        }
    }

    /// The MIME-equivalent type string handed to the save-file collaborator.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Markup => "application/x-yaml",
            Format::Tabular => "text/csv",
            Format::PlainText => "text/plain",
        }
    }

    /// Maps a bare file extension (no dot) to a format.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Markup),
            "csv" => Some(Format::Tabular),
            "txt" => Some(Format::PlainText),
            _ => None,
        }
    }

    /// Sniffs the format from a file name's extension.
    #[must_use]
    pub fn sniff(file_name: &str) -> Option<Format> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Encodes a parsed document into `format`.
///
/// `content` is the raw buffer `value` was parsed from; the plain-text
/// codec passes it through unchanged instead of re-serializing.
pub fn encode(format: Format, content: &str, value: &Value) -> Result<String, FormatError> {
    match format {
        Format::Json => Ok(json::format(value)),
        Format::Markup => Ok(markup::encode(value)),
        Format::Tabular => tabular::encode(value),
        Format::PlainText => Ok(content.to_string()),
    }
}

/// Decodes external text in `format` into the value model.
///
/// Plain text has no structural grammar of its own and is attempted as raw
/// JSON, matching the import path for unrecognised files.
pub fn decode(format: Format, text: &str) -> Result<Value, FormatError> {
    match format {
        Format::Json | Format::PlainText => Ok(json::parse(text)?),
        Format::Markup => Ok(markup::decode(text)),
        Format::Tabular => tabular::decode(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extension_and_mime_tables() {
        assert_eq!(Format::Json.extension(), ".json");
        assert_eq!(Format::Markup.extension(), ".yaml");
        assert_eq!(Format::Tabular.extension(), ".csv");
        assert_eq!(Format::PlainText.extension(), ".txt");
        assert_eq!(Format::Markup.mime_type(), "application/x-yaml");
        assert_eq!(Format::Tabular.mime_type(), "text/csv");
    }

    #[test]
    fn test_sniff_by_extension() {
        assert_eq!(Format::sniff("data.json"), Some(Format::Json));
        assert_eq!(Format::sniff("data.YAML"), Some(Format::Markup));
        assert_eq!(Format::sniff("data.yml"), Some(Format::Markup));
        assert_eq!(Format::sniff("data.csv"), Some(Format::Tabular));
        assert_eq!(Format::sniff("notes.txt"), Some(Format::PlainText));
        assert_eq!(Format::sniff("archive.dat"), None);
        assert_eq!(Format::sniff("no_extension"), None);
    }

    #[test]
    fn test_plain_text_encode_is_identity() {
        let content = "{\n  \"a\": 1\n}";
        let value = json::parse(content).unwrap();
        assert_eq!(encode(Format::PlainText, content, &value).unwrap(), content);
    }

    #[test]
    fn test_json_encode_delegates_to_canonical_format() {
        let value = json!({"a": 1});
        assert_eq!(encode(Format::Json, "ignored", &value).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_decode_dispatch() {
        assert_eq!(
            decode(Format::Markup, "a: 1\n").unwrap(),
            json!({"a": "1"})
        );
        assert_eq!(
            decode(Format::Tabular, "a\n1\n").unwrap(),
            json!([{"a": "1"}])
        );
        assert_eq!(decode(Format::Json, "[1]").unwrap(), json!([1]));
        assert!(decode(Format::PlainText, "not json").is_err());
    }
}
