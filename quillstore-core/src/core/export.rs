//! Document import and export through the format codecs.
//!
//! This is the only module that touches the outside world. Conversion is
//! delegated downward; what lives here is format selection, output naming,
//! and the thin adapters over the platform's file-read and file-save
//! primitives.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::codec::{self, Format};
use crate::core::document::Document;
use crate::core::error::{FormatError, QuillstoreError, Result};
use crate::core::json;

/// A converted payload ready for the save-file collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedFile {
    /// Derived output name, extension included.
    pub file_name: String,
    /// MIME-equivalent type string for the download boundary.
    pub mime_type: String,
    /// The converted text.
    pub content: String,
}

impl ExportedFile {
    /// Writes the payload into `dir`, standing in for the platform's
    /// save-file primitive. Returns the written path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.content)?;
        debug!("wrote export to {}", path.display());
        Ok(path)
    }
}

/// A decoded document ready to be stored, already in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedDocument {
    /// The source file name with its extension stripped.
    pub key: String,
    /// Canonical JSON text, regardless of the source format.
    pub content: String,
}

/// Derives the output file name for a document key: whitespace runs become
/// `_`, the result is lower-cased, and the format's extension is appended.
#[must_use]
pub fn export_file_name(key: &str, format: Format) -> String {
    let stem = key
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    format!("{stem}{}", format.extension())
}

/// Converts a document for export.
///
/// The content must parse as JSON before any format is produced, plain
/// text included — a failed conversion never yields partial output.
/// `pretty` selects between canonical and single-line rendering for the
/// JSON format and is ignored elsewhere.
///
/// # Errors
///
/// [`QuillstoreError::Format`] when the content is not valid JSON or the
/// codec refuses the value (e.g. a non-array root for tabular export).
pub fn export_document(doc: &Document, format: Format, pretty: bool) -> Result<ExportedFile> {
    let value = json::parse(&doc.content).map_err(|e| {
        warn!("refusing to export document {}: {e}", doc.id);
        FormatError::Syntax(e)
    })?;

    let content = if format == Format::Json && !pretty {
        json::format_compact(&value)
    } else {
        codec::encode(format, &doc.content, &value)?
    };

    let file_name = export_file_name(&doc.key, format);
    debug!("exported document {} as {file_name}", doc.id);
    Ok(ExportedFile {
        file_name,
        mime_type: format.mime_type().to_string(),
        content,
    })
}

/// Imports a file's bytes as a document.
///
/// The format is sniffed from the extension; unrecognised extensions are
/// attempted as raw JSON text. Whatever the source format, the decoded
/// value is re-serialized into canonical form before it is stored.
///
/// # Errors
///
/// [`QuillstoreError::SourceRead`] when the bytes are not UTF-8,
/// [`QuillstoreError::Format`] when decoding fails.
pub fn import_document(file_name: &str, bytes: &[u8]) -> Result<ImportedDocument> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| QuillstoreError::SourceRead(format!("{file_name} is not UTF-8: {e}")))?;

    let value = match Format::sniff(file_name) {
        Some(format @ (Format::Json | Format::Markup | Format::Tabular)) => {
            codec::decode(format, text)?
        }
        // `.txt` and unknown extensions alike: accept the content only if
        // it is raw JSON.
        Some(Format::PlainText) | None => codec::decode(Format::PlainText, text)
            .map_err(|_| FormatError::Unrecognized(file_name.to_string()))?,
    };

    let key = Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    debug!("imported {file_name} as document key {key:?}");
    Ok(ImportedDocument {
        key,
        content: json::format(&value),
    })
}

/// Reads a file through the filesystem and imports it, the path-based
/// counterpart of [`import_document`] for hosts without their own file-read
/// primitive.
pub fn import_document_from_path(path: impl AsRef<Path>) -> Result<ImportedDocument> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|e| QuillstoreError::SourceRead(format!("{}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    import_document(&name, &bytes)
}
