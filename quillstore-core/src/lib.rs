//! Core library for Quillstore — a keyed JSON document manager.
//!
//! This crate is the document content transformation engine behind the
//! editor shell: it validates and canonically reformats a document buffer
//! ([`validate`], [`canonicalize`]), classifies formatted lines for
//! highlighting ([`classify`]), and converts documents between JSON, a
//! YAML-like nested markup, CSV-like tabular text, and plain text for
//! import and export ([`export_document`], [`import_document`]).
//!
//! Every operation is a pure function of its inputs; the crate retains no
//! state between calls. The only filesystem touches are the explicit
//! adapters in the export module.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    codec::Format,
    document::Document,
    error::{FormatError, QuillstoreError, Result, SyntaxError},
    export::{
        export_document, export_file_name, import_document, import_document_from_path,
        ExportedFile, ImportedDocument,
    },
    highlight::{classify, classify_line, ClassifiedLine, ValueKind},
    json::{canonicalize, parse, validate, Validation, EMPTY_TEMPLATE},
    value::Value,
};
