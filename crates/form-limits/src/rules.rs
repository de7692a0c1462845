//! Content and length rules for form fields
//!
//! A field passes when it
//! - contains at least one ASCII letter or digit, and
//! - has a length `L` (in characters) with `0 < L <= 26`.

use serde::Serialize;
use std::fmt;

use crate::error::{FormError, Result};

/// Upper bound (inclusive) on a field's length in characters
pub const MAX_FIELD_LEN: usize = 26;

/// Form field under check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule a field can break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Must contain at least one `[A-Za-z0-9]` character
    AlphanumericContent,
    /// Length must be in `(0, 26]`
    Length,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::AlphanumericContent => f.write_str("must contain a letter or digit"),
            Rule::Length => write!(f, "length must be between 1 and {MAX_FIELD_LEN}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RuleViolation {
    pub field: Field,
    pub rule: Rule,
}

impl RuleViolation {
    #[must_use]
    pub const fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

/// True if `value` contains at least one ASCII letter or digit
#[must_use]
pub fn has_alphanumeric(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphanumeric())
}

/// True if `0 < chars(value) <= 26`
#[must_use]
pub fn within_length(value: &str) -> bool {
    let len = value.chars().count();
    len > 0 && len <= MAX_FIELD_LEN
}

/// Outcome of both rules for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: Field,
    /// Length in characters
    pub length: usize,
    pub has_alphanumeric: bool,
    pub within_length: bool,
}

impl FieldReport {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.has_alphanumeric && self.within_length
    }

    /// Violations in rule order (content first, then length)
    pub fn violations(&self) -> impl Iterator<Item = RuleViolation> + '_ {
        let content = (!self.has_alphanumeric)
            .then(|| RuleViolation::new(self.field, Rule::AlphanumericContent));
        let length = (!self.within_length).then(|| RuleViolation::new(self.field, Rule::Length));
        content.into_iter().chain(length)
    }
}

/// Evaluate every rule for one field value
#[must_use]
pub fn validate_field(field: Field, value: &str) -> FieldReport {
    FieldReport {
        field,
        length: value.chars().count(),
        has_alphanumeric: has_alphanumeric(value),
        within_length: within_length(value),
    }
}

/// Per-rule outcome for a whole submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub name: FieldReport,
    pub description: FieldReport,
}

impl FormReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.name.passed() && self.description.passed()
    }

    /// All violations, `name` before `description`
    #[must_use]
    pub fn violations(&self) -> Vec<RuleViolation> {
        self.name
            .violations()
            .chain(self.description.violations())
            .collect()
    }

    /// `Ok(())` when every rule passed, otherwise [`FormError::RuleViolations`]
    pub fn ensure_valid(&self) -> Result<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(FormError::RuleViolations(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_alphanumeric() {
        assert!(has_alphanumeric("ab"));
        assert!(has_alphanumeric("#1#"));
        assert!(has_alphanumeric("--Z"));
        assert!(!has_alphanumeric("###"));
        assert!(!has_alphanumeric(""));
        assert!(!has_alphanumeric("   "));
        // Non-ASCII letters do not count
        assert!(!has_alphanumeric("éü"));
    }

    #[test]
    fn test_within_length_bounds() {
        assert!(!within_length(""));
        assert!(within_length("a"));
        assert!(within_length(&"a".repeat(26)));
        assert!(!within_length(&"a".repeat(27)));
    }

    #[test]
    fn test_within_length_counts_characters() {
        // 26 two-byte characters are still 26 characters
        assert!(within_length(&"é".repeat(26)));
        assert!(!within_length(&"é".repeat(27)));
    }

    #[test]
    fn test_validate_field() {
        let report = validate_field(Field::Description, "");
        assert_eq!(report.length, 0);
        assert!(!report.within_length);
        assert!(!report.has_alphanumeric);
        assert_eq!(
            report.violations().collect::<Vec<_>>(),
            vec![
                RuleViolation::new(Field::Description, Rule::AlphanumericContent),
                RuleViolation::new(Field::Description, Rule::Length),
            ]
        );
    }

    #[test]
    fn test_form_report_ensure_valid() {
        let report = FormReport {
            name: validate_field(Field::Name, "###"),
            description: validate_field(Field::Description, "ok"),
        };
        assert!(!report.is_valid());

        match report.ensure_valid() {
            Err(FormError::RuleViolations(violations)) => {
                assert_eq!(
                    violations,
                    vec![RuleViolation::new(Field::Name, Rule::AlphanumericContent)]
                );
            }
            other => panic!("expected rule violations, got {other:?}"),
        }
    }

    #[test]
    fn test_violation_display() {
        let violation = RuleViolation::new(Field::Name, Rule::Length);
        assert_eq!(violation.to_string(), "name length must be between 1 and 26");
    }
}
