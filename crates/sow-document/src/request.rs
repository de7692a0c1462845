//! Request schema for Statement of Work generation

use indexmap::IndexMap;
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Statement of Work generation request
///
/// `content` keeps JSON insertion order: each key becomes a section heading
/// and each value that section's body, in the order they were sent.
/// Only a JSON object is accepted; arrays and scalars are rejected even
/// when their positional layout would line up with the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SowRequest {
    /// Document title (rendered as the title heading and used in the filename)
    pub title: String,
    /// Unit the SOW belongs to (rendered as `Unit: <unit>`)
    pub unit: String,
    /// Section name -> section body
    pub content: IndexMap<String, String>,
}

#[derive(Deserialize)]
struct SowRequestFields {
    title: String,
    unit: String,
    content: IndexMap<String, String>,
}

struct SowRequestVisitor;

impl<'de> Visitor<'de> for SowRequestVisitor {
    type Value = SowRequestFields;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a SOW request object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        SowRequestFields::deserialize(MapAccessDeserializer::new(map))
    }
}

impl<'de> Deserialize<'de> for SowRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let SowRequestFields {
            title,
            unit,
            content,
        } = deserializer.deserialize_map(SowRequestVisitor)?;
        Ok(Self {
            title,
            unit,
            content,
        })
    }
}

impl SowRequest {
    /// Create a request with no sections
    #[must_use]
    pub fn new(title: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            unit: unit.into(),
            content: IndexMap::new(),
        }
    }

    /// Append a section, keeping insertion order
    #[must_use]
    pub fn with_section(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.content.insert(heading.into(), body.into());
        self
    }

    /// Number of sections in `content`
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.content.len()
    }
}
