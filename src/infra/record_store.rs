// ============================================================
// Layer 6 — File Record Store
// ============================================================
// Persists accepted entries as one human-readable line each:
//
//   Name: Jane Doe, Email: jane@example.com, Age: 30, Category: Adult
//
// This format is part of the store's contract: it never changes
// across appends, and previously written lines are never
// reformatted, rewritten, or deleted.
//
// Append discipline:
//   1. Format the COMPLETE line first (including the newline)
//   2. Open the file in append mode (creating it if missing)
//   3. Write the line with a single write_all call
//   4. Let the handle drop — released on every exit path
//
// Formatting before opening means an I/O failure can only ever
// happen before anything was written or on the one write call,
// so no partially formatted record becomes visible to a reader.
//
// Reading back is lazy: RecordIter walks the file line by line
// and parses as it goes, so listing never loads the whole store
// into memory. Calling iter() again restarts from the top with
// a fresh handle. Lines that do not parse (hand-edited files)
// are skipped with a warning rather than aborting the pass —
// the same stance the rest of this codebase takes on one bad
// input among many.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)
//            Rust Book §13 (Iterators)

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use crate::domain::classification::classify;
use crate::domain::error::StoreError;
use crate::domain::traits::{RecordSink, RecordSource, RecordStream};
use crate::domain::user_record::UserRecord;

/// Serialize one record as its stable store line (no newline).
pub fn record_line(record: &UserRecord) -> String {
    format!(
        "Name: {}, Email: {}, Age: {}, Category: {}",
        record.name, record.email, record.age, record.classification,
    )
}

/// Parse one store line back into a UserRecord.
/// Returns None for lines that don't have the expected shape.
///
/// Splitting on the literal field labels is unambiguous here:
/// names are letters and spaces only and emails contain no
/// commas, so ", Email: " etc. can never appear inside a field.
/// The classification is re-derived from the parsed age (it is
/// a pure function of age), so a stale label in the file can
/// never contradict the number next to it.
pub fn parse_record_line(line: &str) -> Option<UserRecord> {
    let rest            = line.strip_prefix("Name: ")?;
    let (name, rest)    = rest.split_once(", Email: ")?;
    let (email, rest)   = rest.split_once(", Age: ")?;
    let (age, _category) = rest.split_once(", Category: ")?;

    let age: i64 = age.trim().parse().ok()?;

    Some(UserRecord {
        name:           name.to_string(),
        email:          email.to_string(),
        age,
        classification: classify(age),
    })
}

/// The append-only record store, backed by a plain text file.
/// Construct it once with its target path and pass it to every
/// caller — there is no ambient global handle anywhere.
pub struct FileRecordStore {
    /// Path to the backing file (e.g. user_data.txt)
    path: PathBuf,
}

impl FileRecordStore {
    /// Create a store handle for the given path.
    /// The file itself is only created on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Start a fresh lazy pass over every stored record, in
    /// append order. A missing file is an empty store, not an
    /// error — the store simply hasn't seen its first append.
    pub fn iter(&self) -> Result<RecordIter, StoreError> {
        if !self.path.exists() {
            tracing::warn!(
                "Record store '{}' does not exist yet — returning empty listing",
                self.path.display()
            );
            return Ok(RecordIter { lines: None, path: self.path.clone() });
        }

        let file = File::open(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(RecordIter {
            lines: Some(BufReader::new(file).lines()),
            path:  self.path.clone(),
        })
    }
}

impl RecordSink for FileRecordStore {
    fn append(&mut self, record: &UserRecord) -> Result<(), StoreError> {
        // Format the entire line before touching the file
        let line = format!("{}\n", record_line(record));

        // Open in append mode — adds to end of file, never truncates
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open { path: self.path.clone(), source })?;

        // One write call for the whole line
        file.write_all(line.as_bytes())
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;

        tracing::debug!("Appended record for '{}' to '{}'", record.name, self.path.display());
        Ok(())
        // `file` drops here (and on the error paths above), so the
        // handle is released on every exit
    }
}

impl RecordSource for FileRecordStore {
    fn list_all(&self) -> Result<RecordStream<'_>, StoreError> {
        Ok(Box::new(self.iter()?))
    }
}

// ─── RecordIter ───────────────────────────────────────────────────────────────
/// A lazy, finite pass over the store file. Yields records in
/// append order; skips unparseable lines; surfaces read errors.
pub struct RecordIter {
    /// None when the backing file doesn't exist (empty store)
    lines: Option<io::Lines<BufReader<File>>>,
    path:  PathBuf,
}

impl Iterator for RecordIter {
    type Item = Result<UserRecord, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;

        loop {
            match lines.next()? {
                Ok(line) => {
                    // Ignore blank lines silently, warn on anything
                    // that looks like data but doesn't parse
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_record_line(&line) {
                        Some(record) => return Some(Ok(record)),
                        None => {
                            tracing::warn!(
                                "Skipping malformed line in '{}': {:?}",
                                self.path.display(),
                                line
                            );
                        }
                    }
                }
                Err(source) => {
                    return Some(Err(StoreError::Read {
                        path: self.path.clone(),
                        source,
                    }));
                }
            }
        }
    }
}
