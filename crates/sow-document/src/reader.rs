//! DOCX block reader
//!
//! Manual ZIP + XML parsing (docx-rs is writer-only). Only
//! `word/document.xml` is read: every `w:p` in `w:body` becomes one block,
//! with its `w:pStyle` deciding between heading and paragraph. Line breaks
//! (`w:br`, `w:cr`) inside a paragraph read back as `\n`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

use crate::document::{Block, TITLE_LEVEL};
use crate::error::{DocumentError, Result};
use crate::render::{HEADING_STYLE_PREFIX, TITLE_STYLE_ID};

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract an attribute value by key from an element
fn get_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .find(|a| a.as_ref().ok().map(|x| x.key.as_ref()) == Some(key))
        .and_then(std::result::Result::ok)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Heading level for a paragraph style id, `None` for body text styles
fn style_heading_level(style_id: &str) -> Option<u8> {
    if style_id == TITLE_STYLE_ID {
        return Some(TITLE_LEVEL);
    }
    style_id
        .strip_prefix(HEADING_STYLE_PREFIX)
        .and_then(|level| level.parse::<u8>().ok())
}

/// `w:cr`, or a `w:br` that is not a page/column break
fn is_line_break(e: &BytesStart<'_>) -> bool {
    match e.name().as_ref() {
        b"w:cr" => true,
        b"w:br" => !matches!(
            get_attr(e, b"w:type").as_deref(),
            Some("page" | "column")
        ),
        _ => false,
    }
}

#[derive(Debug, Default)]
struct ParagraphState {
    style: Option<String>,
    text: String,
}

impl ParagraphState {
    fn into_block(self) -> Block {
        match self.style.as_deref().and_then(style_heading_level) {
            Some(level) => Block::heading(level, self.text),
            None => Block::paragraph(self.text),
        }
    }
}

/// Read the block sequence back out of a DOCX payload.
pub fn read_blocks(bytes: &[u8]) -> Result<Vec<Block>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let xml_content = {
        let mut document_xml = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| DocumentError::MissingPart(format!("{DOCUMENT_PART}: {e}")))?;
        let mut content = String::new();
        document_xml.read_to_string(&mut content)?;
        content
    };

    walk_body(&xml_content)
}

fn walk_body(xml: &str) -> Result<Vec<Block>> {
    let mut reader = Reader::from_str(xml);
    let mut blocks = Vec::new();
    let mut in_body = false;
    let mut in_text = false;
    let mut paragraph: Option<ParagraphState> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:body" => in_body = true,
                b"w:p" if in_body => paragraph = Some(ParagraphState::default()),
                b"w:pStyle" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.style = get_attr(&e, b"w:val");
                    }
                }
                b"w:t" if paragraph.is_some() => in_text = true,
                b"w:br" | b"w:cr" if is_line_break(&e) => {
                    if let Some(p) = paragraph.as_mut() {
                        p.text.push('\n');
                    }
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if in_body => blocks.push(Block::paragraph(String::new())),
                b"w:pStyle" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.style = get_attr(&e, b"w:val");
                    }
                }
                b"w:br" | b"w:cr" if is_line_break(&e) => {
                    if let Some(p) = paragraph.as_mut() {
                        p.text.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(t) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.text.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(p) = paragraph.take() {
                        blocks.push(p.into_block());
                    }
                }
                b"w:body" => in_body = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!("Read {} blocks from {}", blocks.len(), DOCUMENT_PART);
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t xml:space="preserve">Cleaning</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">Unit: </w:t></w:r><w:r><w:t>A &amp; B</w:t></w:r></w:p><w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Scope</w:t></w:r></w:p><w:p/><w:sectPr/></w:body></w:document>"#;

    #[test]
    fn test_walk_body() {
        let blocks = walk_body(BODY).unwrap();
        assert_eq!(
            blocks,
            vec![
                Block::heading(0, "Cleaning"),
                Block::paragraph("Unit: A & B"),
                Block::heading(2, "Scope"),
                Block::paragraph(""),
            ]
        );
    }

    #[test]
    fn test_walk_body_line_breaks() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Line one</w:t><w:br w:type="textWrapping"/><w:t>Line two</w:t><w:cr/><w:br/><w:t>end</w:t><w:br w:type="page"/></w:r></w:p></w:body></w:document>"#;
        let blocks = walk_body(xml).unwrap();
        assert_eq!(blocks, vec![Block::paragraph("Line one\nLine two\n\nend")]);
    }

    #[test]
    fn test_style_heading_level() {
        assert_eq!(style_heading_level("Title"), Some(0));
        assert_eq!(style_heading_level("Heading1"), Some(1));
        assert_eq!(style_heading_level("Heading9"), Some(9));
        assert_eq!(style_heading_level("Normal"), None);
        assert_eq!(style_heading_level("HeadingX"), None);
    }

    #[test]
    fn test_not_a_zip() {
        let err = read_blocks(b"plain text, not a package").unwrap_err();
        assert!(matches!(err, DocumentError::Archive(_)));
    }
}
