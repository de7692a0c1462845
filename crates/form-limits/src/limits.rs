//! Free-text limits for SOW form inputs: allowed characters, word counts
//! and numeric-only phrases.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FormError, Result};

/// Letters, digits, whitespace and common punctuation
static ALLOWED_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[A-Za-z0-9 .,!?"'()\-\n\r]+$"#).expect("valid regex"));

/// Optional integer part, optional dot(s), then at least one digit
static NUMERIC_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*[.]*[0-9]+$").expect("valid regex"));

/// Non-empty, at most `max_len` characters, and only letters, digits,
/// spaces, line breaks and `.,!?"'()-`.
#[must_use]
pub fn is_valid_text(input: &str, max_len: usize) -> bool {
    if input.is_empty() || input.chars().count() > max_len {
        return false;
    }
    ALLOWED_TEXT.is_match(input)
}

/// Whether `phrase` has at most `max_words` whitespace-separated words.
///
/// A blank phrase is not within the limit. `max_words` must be positive.
pub fn within_word_limit(phrase: &str, max_words: usize) -> Result<bool> {
    if max_words == 0 {
        return Err(FormError::ZeroWordLimit);
    }

    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }
    Ok(trimmed.split_whitespace().count() <= max_words)
}

/// True if `phrase` is made of digits with an optional decimal point
/// (`"12345"`, `"0.5"`, `".5"`).
#[must_use]
pub fn is_numeric_phrase(phrase: &str) -> bool {
    NUMERIC_PHRASE.is_match(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text() {
        assert!(is_valid_text("SOW123", 10));
        assert!(is_valid_text("Hello!", 10));
        assert!(is_valid_text("(a) \"b\"", 10));
        assert!(is_valid_text("line\r\nnext", 10));
    }

    #[test]
    fn test_invalid_text() {
        assert!(!is_valid_text("<malcode>", 10));
        assert!(!is_valid_text("jdaklf;jslakfs", 10));
        assert!(!is_valid_text("", 10));
        assert!(!is_valid_text("semi;colon", 20));
        assert!(!is_valid_text("tab\there", 20));
    }

    #[test]
    fn test_valid_text_length_boundary() {
        assert!(is_valid_text("abcdefghij", 10));
        assert!(!is_valid_text("abcdefghijk", 10));
    }

    #[test]
    fn test_word_limit() {
        assert!(within_word_limit("I want to test this.", 5).unwrap());
        assert!(!within_word_limit("I want to test this larger string.", 5).unwrap());
        assert!(within_word_limit("  spaced    out\twords ", 3).unwrap());
    }

    #[test]
    fn test_word_limit_blank_phrase() {
        assert!(!within_word_limit("", 5).unwrap());
        assert!(!within_word_limit("   \n ", 5).unwrap());
    }

    #[test]
    fn test_word_limit_zero() {
        assert!(matches!(
            within_word_limit("I want to test this.", 0),
            Err(FormError::ZeroWordLimit)
        ));
    }

    #[test]
    fn test_numeric_phrase() {
        assert!(is_numeric_phrase("12345"));
        assert!(is_numeric_phrase("12345.6789"));
        assert!(is_numeric_phrase(".12345"));
        assert!(is_numeric_phrase("0.12345"));
    }

    #[test]
    fn test_non_numeric_phrase() {
        assert!(!is_numeric_phrase("a12345"));
        assert!(!is_numeric_phrase("123a456"));
        assert!(!is_numeric_phrase("123456a"));
        assert!(!is_numeric_phrase(""));
        assert!(!is_numeric_phrase("12."));
    }
}
