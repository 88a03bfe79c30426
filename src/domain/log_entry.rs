// ============================================================
// Layer 3 — LogEntry Domain Type
// ============================================================
// One line of the attempt log: a timestamp plus what happened.
// EVERY submission produces exactly one LogEntry — accepted
// attempts carry the stored record, rejected attempts carry the
// validation failure. Entries are append-only and are never
// mutated or deleted once written.
//
// Reference: Rust Book §6 (Enums)

use chrono::{DateTime, Local};

use crate::domain::error::ValidationError;
use crate::domain::user_record::UserRecord;

/// The result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The record passed validation and was appended to the store
    Accepted(UserRecord),

    /// A field failed validation; nothing was appended
    Rejected(ValidationError),
}

/// A single attempt-log line: when it happened and what happened.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub outcome:   Outcome,
}

impl LogEntry {
    /// An entry with an explicit timestamp — used by tests that
    /// need deterministic output.
    pub fn new(timestamp: DateTime<Local>, outcome: Outcome) -> Self {
        Self { timestamp, outcome }
    }

    /// An accepted attempt, stamped with the current local time.
    pub fn accepted(record: UserRecord) -> Self {
        Self::new(Local::now(), Outcome::Accepted(record))
    }

    /// A rejected attempt, stamped with the current local time.
    pub fn rejected(reason: ValidationError) -> Self {
        Self::new(Local::now(), Outcome::Rejected(reason))
    }
}
