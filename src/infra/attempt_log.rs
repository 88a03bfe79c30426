// ============================================================
// Layer 6 — Attempt Log
// ============================================================
// Records one timestamped line per submission attempt in a
// separate file from the record store. Accepted attempts echo
// the stored record; rejected attempts carry the reason.
//
// Example log output:
//   2026-08-29 14:03:11 - ACCEPTED - Name: Jane Doe, Email: jane@example.com, Age: 30, Category: Adult
//   2026-08-29 14:03:12 - REJECTED - invalid name "J4ne": names must contain only letters and spaces
//
// Same append discipline as the record store: format the whole
// line first, open in append mode, one write call, handle
// released on every exit path. Entries are never mutated or
// deleted — the log is the permanent record of every attempt,
// which is exactly what makes a rejected submission auditable
// even though it left no trace in the store.
//
// Note this is a DOMAIN artifact, not diagnostics: tracing
// handles the operator-facing logging; this file is part of the
// system's specified output.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
};

use crate::domain::error::StoreError;
use crate::domain::log_entry::{LogEntry, Outcome};
use crate::domain::traits::AttemptSink;
use crate::infra::record_store::record_line;

/// Serialize one attempt as its log line (no newline).
/// Timestamp format matches the classic `asctime - level -
/// message` layout so existing logs stay greppable.
pub fn format_entry(entry: &LogEntry) -> String {
    let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S");
    match &entry.outcome {
        Outcome::Accepted(record) => {
            format!("{timestamp} - ACCEPTED - {}", record_line(record))
        }
        Outcome::Rejected(reason) => {
            format!("{timestamp} - REJECTED - {reason}")
        }
    }
}

/// The append-only attempt log, backed by a plain text file.
pub struct AttemptLog {
    /// Path to the backing file (e.g. app_logs.txt)
    path: PathBuf,
}

impl AttemptLog {
    /// Create a log handle for the given path.
    /// The file itself is only created on the first attempt.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AttemptSink for AttemptLog {
    fn log_attempt(&mut self, entry: &LogEntry) -> Result<(), StoreError> {
        let line = format!("{}\n", format_entry(entry));

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open { path: self.path.clone(), source })?;

        file.write_all(line.as_bytes())
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;

        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ValidationError;
    use crate::domain::user_record::UserRecord;
    use chrono::{Local, TimeZone};
    use tempfile::tempdir;

    fn fixed_time() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 29, 14, 3, 11).unwrap()
    }

    #[test]
    fn test_accepted_entry_echoes_the_record() {
        let record = UserRecord::validated("Jane Doe", "jane@example.com", "30").unwrap();
        let entry  = LogEntry::new(fixed_time(), Outcome::Accepted(record));

        assert_eq!(
            format_entry(&entry),
            "2026-08-29 14:03:11 - ACCEPTED - \
             Name: Jane Doe, Email: jane@example.com, Age: 30, Category: Adult"
        );
    }

    #[test]
    fn test_rejected_entry_carries_the_reason() {
        let reason = ValidationError::InvalidName("J4ne".to_string());
        let entry  = LogEntry::new(fixed_time(), Outcome::Rejected(reason));

        let line = format_entry(&entry);
        assert!(line.starts_with("2026-08-29 14:03:11 - REJECTED - "));
        assert!(line.contains("name"));
        assert!(line.contains("J4ne"));
    }

    #[test]
    fn test_log_appends_one_line_per_attempt() {
        let dir     = tempdir().unwrap();
        let path    = dir.path().join("app_logs.txt");
        let mut log = AttemptLog::new(&path);

        let record = UserRecord::validated("Sam", "sam@x.org", "65").unwrap();
        log.log_attempt(&LogEntry::accepted(record)).unwrap();
        log.log_attempt(&LogEntry::rejected(ValidationError::InvalidAge("-5".to_string())))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ACCEPTED"));
        assert!(lines[1].contains("REJECTED"));
    }
}
