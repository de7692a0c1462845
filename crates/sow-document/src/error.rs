//! Error types for building, rendering and reading SOW documents.

use thiserror::Error;

/// Errors raised while rendering or reading a DOCX package.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The DOCX writer failed to pack the document into its ZIP container.
    #[error("Render error: {0}")]
    Render(String),

    /// The payload is not a readable ZIP container.
    #[error("Archive error: {0}")]
    Archive(String),

    /// A required package part is absent (e.g. `word/document.xml`).
    #[error("Missing package part: {0}")]
    MissingPart(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for DocumentError {
    fn from(err: zip::result::ZipError) -> Self {
        DocumentError::Archive(err.to_string())
    }
}

impl From<quick_xml::Error> for DocumentError {
    fn from(err: quick_xml::Error) -> Self {
        DocumentError::Xml(err.to_string())
    }
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
