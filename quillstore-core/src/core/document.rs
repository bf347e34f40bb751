//! The keyed document owned by the editor and session state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::json::{self, Validation};

/// A single keyed JSON document.
///
/// `content` is the raw editor buffer. When valid it deserializes through
/// the JSON grammar; when invalid it is kept verbatim — the validity flag
/// lives in the [`Validation`] returned by [`Document::validate`], never in
/// mutated content. The caller owns the document; the core holds no
/// references across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque UUID identifier.
    pub id: String,
    /// Display name, also the stem of exported file names.
    pub key: String,
    /// Raw text buffer.
    pub content: String,
    /// Unix timestamp (seconds) of creation.
    pub created_at: i64,
    /// Unix timestamp (seconds) of the last buffer replacement.
    pub modified_at: i64,
}

impl Document {
    /// Creates a document with the empty-object starter content `{}`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Document {
            id: Uuid::new_v4().to_string(),
            key: key.into(),
            content: "{}".to_string(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Replaces the whole buffer and re-validates it.
    ///
    /// Invalid text is stored verbatim; the returned [`Validation`] carries
    /// the parser's message so the user can keep typing through a transient
    /// syntax error.
    pub fn replace_content(&mut self, text: impl Into<String>) -> Validation {
        self.content = text.into();
        self.modified_at = chrono::Utc::now().timestamp();
        self.validate()
    }

    /// Validates the current buffer without mutating it.
    #[must_use]
    pub fn validate(&self) -> Validation {
        json::validate(&self.content)
    }
}
