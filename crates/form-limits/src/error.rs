//! Error types for form submission checks.

use std::path::PathBuf;
use thiserror::Error;

use crate::rules::RuleViolation;

#[derive(Debug, Error)]
pub enum FormError {
    /// The fixture could not be read (missing file, permissions, ...)
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not a JSON object with string `name` and `description`
    #[error("Invalid form submission in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The submission parsed but broke one or more content rules
    #[error("{} rule violation(s): {}", .0.len(), join_violations(.0))]
    RuleViolations(Vec<RuleViolation>),

    /// A word limit must be a positive integer
    #[error("Word limit must be a positive integer")]
    ZeroWordLimit,
}

fn join_violations(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for form checks
pub type Result<T> = std::result::Result<T, FormError>;
