//! Checks for stored form submissions
//!
//! Form submissions (`{"name": ..., "description": ...}`) are written as JSON
//! files into a stash directory by an external pipeline. This crate parses
//! them and reports, per field, whether it contains a letter or digit and
//! whether its length is within `(0, 26]`.
//!
//! ```rust,ignore
//! use form_limits::{check_fixture, FixtureStash};
//!
//! let report = check_fixture("File_Stash/test2.json")?;
//! report.ensure_valid()?;
//!
//! for outcome in FixtureStash::in_current_dir()?.check_all()? {
//!     println!("{}: {}", outcome.path.display(), outcome.passed());
//! }
//! ```

pub mod error;
pub mod limits;
pub mod rules;
pub mod stash;
pub mod submission;

pub use error::{FormError, Result};
pub use limits::{is_numeric_phrase, is_valid_text, within_word_limit};
pub use rules::{
    has_alphanumeric, validate_field, within_length, Field, FieldReport, FormReport, Rule,
    RuleViolation, MAX_FIELD_LEN,
};
pub use stash::{FixtureOutcome, FixtureStash, DEFAULT_STASH_DIR};
pub use submission::{check_fixture, FormSubmission};
