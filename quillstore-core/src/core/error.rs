//! Error types for the Quillstore core library.

use thiserror::Error;

/// A JSON grammar violation reported while parsing document content.
///
/// Carries the parser's message verbatim; callers display it unmodified
/// next to the editor buffer rather than categorising it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SyntaxError(pub String);

impl From<serde_json::Error> for SyntaxError {
    fn from(err: serde_json::Error) -> Self {
        SyntaxError(err.to_string())
    }
}

/// A codec-level failure while converting between formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The document content failed to parse as JSON before conversion.
    #[error("Invalid JSON content: {0}")]
    Syntax(#[from] SyntaxError),

    /// Tabular encoding requires the root value to be an array of objects.
    #[error("Tabular export requires an array of objects")]
    NotTabular,

    /// Tabular encoding of an empty array has no first row to derive a header from.
    #[error("Tabular export requires at least one row")]
    EmptyTabular,

    /// A tabular data row does not line up with the header row.
    #[error("Row {line} has {found} fields, expected {expected}")]
    RowLength {
        /// One-based line number within the input.
        line: usize,
        /// Field count of the header row.
        expected: usize,
        /// Field count actually found on this row.
        found: usize,
    },

    /// A file with an unrecognised extension was not valid raw JSON either.
    #[error("Unsupported file format or invalid content: {0}")]
    Unrecognized(String),
}

/// All errors that can occur within the Quillstore core library.
#[derive(Debug, Error)]
pub enum QuillstoreError {
    /// Document content violated the JSON grammar.
    #[error("Invalid JSON: {0}")]
    Syntax(#[from] SyntaxError),

    /// A format conversion failed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A source file could not be read during import.
    #[error("Could not read source file: {0}")]
    SourceRead(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias that pins the error type to [`QuillstoreError`].
pub type Result<T> = std::result::Result<T, QuillstoreError>;

impl QuillstoreError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Syntax(e) => format!("Invalid JSON: {e}"),
            Self::Format(e) => e.to_string(),
            Self::SourceRead(_) => "Error reading file".to_string(),
            Self::Io(e) => format!("File error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message_is_verbatim() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let expected = parse_err.to_string();
        assert_eq!(SyntaxError::from(parse_err).to_string(), expected);
    }

    #[test]
    fn test_row_length_display() {
        let e = FormatError::RowLength { line: 3, expected: 2, found: 4 };
        assert_eq!(e.to_string(), "Row 3 has 4 fields, expected 2");
    }

    #[test]
    fn test_user_message_for_source_read() {
        let e = QuillstoreError::SourceRead("boom".to_string());
        assert_eq!(e.user_message(), "Error reading file");
    }
}
