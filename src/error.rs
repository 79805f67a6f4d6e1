//! Error types for document processing.
//!
//! All errors are terminal for the current upload attempt; nothing is retried
//! automatically. Unsupported types are rejected before any processing,
//! extraction failures carry file-kind context, and stage failures share a
//! fixed user-visible prefix.

use thiserror::Error;

use crate::source::DocumentKind;

/// Boxed source error for extraction failures.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the document source and pipeline session.
#[derive(Debug, Error)]
pub enum StudyError {
    /// The declared MIME type is not one of the supported document kinds.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// The underlying reader/parser failed; carries file-kind context.
    #[error("Failed to extract text from {kind} document: {source}")]
    Extraction {
        kind: DocumentKind,
        #[source]
        source: BoxedError,
    },

    /// A pipeline stage failed while deriving study aids.
    #[error("Error processing document content: {0}")]
    Processing(String),
}

impl StudyError {
    /// Wrap a reader/parser error with file-kind context.
    pub fn extraction(kind: DocumentKind, source: impl Into<BoxedError>) -> Self {
        Self::Extraction {
            kind,
            source: source.into(),
        }
    }
}
