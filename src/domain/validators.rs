// ============================================================
// Layer 3 — Field Validators
// ============================================================
// One pure function per field. Each validator either accepts
// the raw input or returns the ValidationError variant naming
// that field — no side effects, no I/O, deterministic, so each
// rule can be unit tested on its own.
//
// The rules:
//   name  — non-empty after trimming; every character must be
//           a letter or a space (no digits, no punctuation)
//   email — conventional local@domain.tld shape: exactly one
//           '@', at least one '.' after it, no whitespace,
//           no empty segments
//   age   — parses as an integer and is strictly positive
//
// Reference: Rust Book §8 (Strings), §9 (Error Handling)

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::error::ValidationError;

// ─── Name ─────────────────────────────────────────────────────────────────────

/// Accept a name made up of letters and spaces only.
/// "Jane Doe" passes; "J4ne", "Jane!" and "   " all fail.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    // Empty (or all-whitespace) names are rejected outright
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidName(name.to_string()));
    }

    // char::is_alphabetic is Unicode-aware, so accented names
    // like "Zoë" are accepted the same way they would be by
    // a str.isalpha() style check
    if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidName(name.to_string()));
    }

    Ok(())
}

// ─── Email ────────────────────────────────────────────────────────────────────

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// The compiled email shape, built once and reused.
/// `[^\s@]+` forbids whitespace and a second '@' in every
/// segment, and the `\.` requires a dotted domain.
fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Accept an email with the conventional local@domain.tld shape.
/// This is a shape check, not RFC 5322 — the same level of rigour
/// a registration form applies.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

// ─── Age ──────────────────────────────────────────────────────────────────────

/// Parse the raw age string and require a strictly positive value.
/// Returns the parsed integer on success so the caller never has
/// to re-parse.
pub fn validate_age(raw: &str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(age) if age > 0 => Ok(age),
        // Both parse failures and non-positive values land here
        _ => Err(ValidationError::InvalidAge(raw.to_string())),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_letters_and_spaces() {
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("Sam").is_ok());
        // Unicode letters are still letters
        assert!(validate_name("Zoë Brontë").is_ok());
    }

    #[test]
    fn test_name_rejects_digits_and_symbols() {
        assert!(validate_name("J4ne").is_err());
        assert!(validate_name("Jane!").is_err());
        assert!(validate_name("Jane_Doe").is_err());
        assert!(validate_name("Jane, Doe").is_err());
    }

    #[test]
    fn test_name_rejects_empty_and_whitespace() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_name_error_names_the_field() {
        let err = validate_name("J4ne").unwrap_err();
        assert_eq!(err, ValidationError::InvalidName("J4ne".to_string()));
    }

    #[test]
    fn test_email_accepts_conventional_shapes() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("sam@x.org").is_ok());
        assert!(validate_email("first.last+tag@mail.example.co").is_ok());
        // Case does not matter anywhere in the address
        assert!(validate_email("Jane@Example.COM").is_ok());
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(validate_email("jane.example.com").is_err());
    }

    #[test]
    fn test_email_rejects_missing_domain_dot() {
        // No '.' after the '@'
        assert!(validate_email("jane@example").is_err());
    }

    #[test]
    fn test_email_rejects_double_at_and_whitespace() {
        assert!(validate_email("jane@@example.com").is_err());
        assert!(validate_email("jane doe@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jane@.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_age_accepts_positive_integers() {
        assert_eq!(validate_age("30").unwrap(), 30);
        assert_eq!(validate_age("1").unwrap(), 1);
        // Leading/trailing whitespace is tolerated, like int("  65 ")
        assert_eq!(validate_age(" 65 ").unwrap(), 65);
    }

    #[test]
    fn test_age_rejects_zero_and_negative() {
        assert!(validate_age("0").is_err());
        assert!(validate_age("-5").is_err());
    }

    #[test]
    fn test_age_rejects_non_integers() {
        assert!(validate_age("abc").is_err());
        assert!(validate_age("12.5").is_err());
        assert!(validate_age("").is_err());
    }
}
