//! Block-level document model for generated SOWs
//!
//! A SOW document is a flat, ordered list of blocks:
//!
//! ```text
//! Heading(0)  <title>
//! Paragraph   Unit: <unit>
//! Heading(1)  <section 1>
//! Paragraph   <body 1>
//! ...
//! ```
//!
//! so a request with `N` sections always yields `2 + 2N` blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::request::SowRequest;

/// Heading level used for the document title
pub const TITLE_LEVEL: u8 = 0;

/// Heading level used for section headings
pub const SECTION_LEVEL: u8 = 1;

/// A single content unit of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Heading block (level 0 is the document title)
    Heading { level: u8, text: String },
    /// Plain paragraph
    Paragraph { text: String },
}

impl Block {
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Text carried by the block
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } => text,
        }
    }

    #[must_use]
    pub const fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading { level, text } => write!(f, "H{level}:{text:?}"),
            Block::Paragraph { text } => write!(f, "P:{text:?}"),
        }
    }
}

/// Generated Statement of Work, ready to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SowDocument {
    blocks: Vec<Block>,
}

impl SowDocument {
    /// Build the document for a request in one pass over its sections.
    #[must_use]
    pub fn from_request(request: &SowRequest) -> Self {
        let mut doc = Self {
            blocks: Vec::with_capacity(2 + 2 * request.section_count()),
        };

        doc.push(Block::heading(TITLE_LEVEL, request.title.as_str()));
        doc.push(Block::paragraph(format!("Unit: {}", request.unit)));

        for (section, text) in &request.content {
            doc.push(Block::heading(SECTION_LEVEL, section.as_str()));
            doc.push(Block::paragraph(text.as_str()));
        }

        log::debug!(
            "Built SOW document '{}' with {} blocks",
            request.title,
            doc.len()
        );
        doc
    }

    /// Append a block at the end of the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Highest heading level in the document, if it has any headings
    #[must_use]
    pub fn max_heading_level(&self) -> Option<u8> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level, .. } => Some(*level),
                Block::Paragraph { .. } => None,
            })
            .max()
    }
}

impl From<Vec<Block>> for SowDocument {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
