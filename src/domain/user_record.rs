// ============================================================
// Layer 3 — UserRecord Domain Type
// ============================================================
// A single accepted entry: name, email, age, and the derived
// age-band classification.
//
// The invariant that matters: a UserRecord only ever comes into
// existence AFTER all three raw fields have passed validation.
// The `validated` constructor is the one gate — it runs every
// field validator in order and refuses to build the record on
// the first failure, so a partially valid record can never
// reach the store.
//
// Email uniqueness is deliberately NOT enforced: submitting the
// same email twice produces two entries, exactly as the store
// has always behaved.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::classification::{classify, Classification};
use crate::domain::error::ValidationError;
use crate::domain::validators::{validate_age, validate_email, validate_name};

/// A validated, classified user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Full name — letters and spaces only
    pub name: String,

    /// Email address in local@domain.tld shape
    pub email: String,

    /// Age in years, strictly positive
    pub age: i64,

    /// Derived age band — always equal to classify(age)
    pub classification: Classification,
}

impl UserRecord {
    /// Validate all three raw fields and build the record.
    ///
    /// Fields are checked in order (name, email, age) and the
    /// FIRST failure is returned, so the caller can report one
    /// specific field per rejection. Name and email are stored
    /// trimmed; the classification is computed from the parsed
    /// age right here, never supplied from outside.
    pub fn validated(name: &str, email: &str, age: &str) -> Result<Self, ValidationError> {
        validate_name(name)?;
        validate_email(email.trim())?;
        let age = validate_age(age)?;

        Ok(Self {
            name:           name.trim().to_string(),
            email:          email.trim().to_string(),
            age,
            classification: classify(age),
        })
    }
}
