//! Stored form submission schema

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{FormError, Result};
use crate::rules::{validate_field, Field, FormReport};

/// Form submission as written to the fixture stash
///
/// Must be stored as a JSON object; `["name", "description"]` is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
struct SubmissionFields {
    name: String,
    description: String,
}

struct SubmissionVisitor;

impl<'de> Visitor<'de> for SubmissionVisitor {
    type Value = SubmissionFields;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a form submission object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Self::Value, A::Error> {
        SubmissionFields::deserialize(MapAccessDeserializer::new(map))
    }
}

impl<'de> Deserialize<'de> for FormSubmission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let SubmissionFields { name, description } =
            deserializer.deserialize_map(SubmissionVisitor)?;
        Ok(Self { name, description })
    }
}

impl FormSubmission {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Parse a submission from JSON text. `source` is only used in errors.
    pub fn from_json_str(json: &str, source: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FormError::Parse {
            path: source.to_path_buf(),
            source: e,
        })
    }

    /// Read and parse a fixture file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| FormError::Io {
            path: PathBuf::from(path),
            source: e,
        })?;
        Self::from_json_str(&json, path)
    }

    /// Evaluate the content and length rules for both fields
    #[must_use]
    pub fn validate(&self) -> FormReport {
        FormReport {
            name: validate_field(Field::Name, &self.name),
            description: validate_field(Field::Description, &self.description),
        }
    }
}

/// Parse a fixture file and evaluate its rules.
///
/// Parse failures are returned as errors; rule failures are reported in the
/// returned [`FormReport`].
pub fn check_fixture(path: impl AsRef<Path>) -> Result<FormReport> {
    let path = path.as_ref();
    let report = FormSubmission::from_path(path)?.validate();
    if !report.is_valid() {
        log::warn!(
            "{} failed {} rule(s)",
            path.display(),
            report.violations().len()
        );
    }
    Ok(report)
}
