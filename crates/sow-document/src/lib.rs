//! Statement of Work (SOW) document generation
//!
//! Turns a [`SowRequest`] (title, unit and ordered sections) into a DOCX
//! package:
//!
//! ```rust,ignore
//! use sow_document::{generate, SowRequest};
//!
//! let request = SowRequest::new("Cleaning", "Unit 1").with_section("Scope", "Wash windows");
//! let sow = generate(&request)?;
//! assert_eq!(sow.filename, "sow-Cleaning.docx");
//! std::fs::write(&sow.filename, &sow.bytes)?;
//! ```

pub mod document;
pub mod error;
pub mod reader;
pub mod render;
pub mod request;

pub use document::{Block, SowDocument, SECTION_LEVEL, TITLE_LEVEL};
pub use error::{DocumentError, Result};
pub use reader::read_blocks;
pub use render::{heading_style_id, render_docx};
pub use request::SowRequest;

/// MIME type of a WordprocessingML package
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Download filename for a SOW. The title is used verbatim.
#[must_use]
pub fn sow_filename(title: &str) -> String {
    format!("sow-{title}.docx")
}

/// Rendered SOW ready to be sent as a download
#[derive(Debug, Clone)]
pub struct GeneratedSow {
    /// Suggested filename (`sow-<title>.docx`)
    pub filename: String,
    /// DOCX package bytes
    pub bytes: Vec<u8>,
    /// Number of blocks written to the document
    pub block_count: usize,
}

/// Build and render the SOW for a request.
pub fn generate(request: &SowRequest) -> Result<GeneratedSow> {
    let doc = SowDocument::from_request(request);
    let bytes = render_docx(&doc)?;
    Ok(GeneratedSow {
        filename: sow_filename(&request.title),
        bytes,
        block_count: doc.len(),
    })
}
