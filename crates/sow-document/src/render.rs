//! DOCX rendering via `docx-rs`
//!
//! Headings are written as styled paragraphs: level 0 uses the `Title`
//! style, level N uses `HeadingN`. The reader in [`crate::reader`] maps the
//! same style ids back to heading levels.

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use std::collections::BTreeSet;
use std::io::Cursor;

use crate::document::{Block, SowDocument, TITLE_LEVEL};
use crate::error::{DocumentError, Result};

/// Style id used for level-0 headings
pub const TITLE_STYLE_ID: &str = "Title";

/// Style id prefix for level-N headings (`Heading1`, `Heading2`, ...)
pub const HEADING_STYLE_PREFIX: &str = "Heading";

/// Paragraph style id for a heading level
#[must_use]
pub fn heading_style_id(level: u8) -> String {
    if level == TITLE_LEVEL {
        TITLE_STYLE_ID.to_string()
    } else {
        format!("{HEADING_STYLE_PREFIX}{level}")
    }
}

fn heading_style(level: u8) -> Style {
    if level == TITLE_LEVEL {
        return Style::new(TITLE_STYLE_ID, StyleType::Paragraph)
            .name("Title")
            .size(56);
    }
    // 16pt for level 1, shrinking by 1pt per level (sizes are half-points)
    let size = 32usize.saturating_sub(2 * usize::from(level - 1)).max(22);
    Style::new(heading_style_id(level), StyleType::Paragraph)
        .name(format!("Heading {level}"))
        .size(size)
        .bold()
}

/// Build a run for `text`, turning `\n`, `\r\n` and `\r` into line breaks.
///
/// `w:t` cannot carry newlines, so each line gets its own text element with
/// a `w:br` between them.
fn text_run(text: &str) -> Run {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut run = Run::new();
    for (i, line) in normalized.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    run
}

fn block_paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Heading { level, text } => Paragraph::new()
            .add_run(text_run(text))
            .style(&heading_style_id(*level)),
        Block::Paragraph { text } => Paragraph::new().add_run(text_run(text)),
    }
}

/// Serialize a document into an in-memory DOCX package.
pub fn render_docx(doc: &SowDocument) -> Result<Vec<u8>> {
    let levels: BTreeSet<u8> = doc
        .blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Heading { level, .. } => Some(*level),
            Block::Paragraph { .. } => None,
        })
        .collect();

    let mut docx = Docx::new();
    for level in levels {
        docx = docx.add_style(heading_style(level));
    }
    for block in doc.blocks() {
        docx = docx.add_paragraph(block_paragraph(block));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocumentError::Render(e.to_string()))?;

    let bytes = buffer.into_inner();
    log::debug!(
        "Rendered {} blocks into {} byte DOCX package",
        doc.len(),
        bytes.len()
    );
    Ok(bytes)
}
