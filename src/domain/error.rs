// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Two families of failure, kept distinct because the caller
// handles them differently:
//
//   ValidationError — the INPUT was bad. Recoverable: the
//                     caller can correct the field and resubmit.
//                     Each variant names the failing field and
//                     carries the offending raw value.
//
//   StoreError      — the STORE or LOG was unavailable
//                     (permissions, disk full, missing path).
//                     Surfaced verbatim to the caller; never
//                     retried or swallowed here.
//
//   SubmitError     — the union of the two, returned by the
//                     submit operation.
//
// thiserror generates the Display and Error impls from the
// #[error] attributes, so every rejection message names the
// invalid field without any hand-written boilerplate.
//
// Reference: Rust Book §9 (Error Handling)

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single field failed validation. The record was NOT stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name was empty or contained a non-letter, non-space character
    #[error("invalid name {0:?}: names must contain only letters and spaces")]
    InvalidName(String),

    /// Email did not have the local@domain.tld shape
    #[error("invalid email {0:?}: expected an address like local@domain.tld")]
    InvalidEmail(String),

    /// Age did not parse as an integer, or was zero/negative
    #[error("invalid age {0:?}: age must be a positive whole number")]
    InvalidAge(String),
}

impl ValidationError {
    /// The name of the field that failed, for callers that
    /// report rejections field-by-field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidName(_)  => "name",
            ValidationError::InvalidEmail(_) => "email",
            ValidationError::InvalidAge(_)   => "age",
        }
    }
}

/// The backing file for the record store or attempt log
/// could not be opened, written, or read.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot open '{path}' for append")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read from '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything a submit can fail with: a bad field, or an
/// unavailable store/log.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
