//! Internal domain modules for the Quillstore core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod codec;
pub mod document;
pub mod error;
pub mod export;
pub mod highlight;
pub mod json;
pub mod value;

#[doc(inline)]
pub use codec::Format;
#[doc(inline)]
pub use document::Document;
#[doc(inline)]
pub use error::{FormatError, QuillstoreError, Result, SyntaxError};
#[doc(inline)]
pub use export::{
    export_document, export_file_name, import_document, import_document_from_path, ExportedFile,
    ImportedDocument,
};
#[doc(inline)]
pub use highlight::{classify, classify_line, ClassifiedLine, ValueKind};
#[doc(inline)]
pub use json::{canonicalize, validate, Validation, EMPTY_TEMPLATE};
#[doc(inline)]
pub use value::Value;
