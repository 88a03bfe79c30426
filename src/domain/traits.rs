// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams between the use cases (Layer 2) and persistence
// (Layer 6). The application layer only ever talks to these
// traits, so the file-backed store can be swapped for any other
// backend without touching the validation or orchestration code.
//
// All three are APPEND/READ abstractions — there is no update
// and no delete anywhere in this system. The write methods take
// &mut self so the compiler enforces a single writer per store
// handle within the process; cross-process locking is a caller
// concern.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::error::StoreError;
use crate::domain::log_entry::LogEntry;
use crate::domain::user_record::UserRecord;

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Any component that can durably append accepted records.
///
/// Implementations:
///   - FileRecordStore → one line per record in a text file
pub trait RecordSink {
    /// Append one record. Either the whole record becomes
    /// visible to a later read, or nothing does — implementors
    /// must never leave a partial entry behind.
    fn append(&mut self, record: &UserRecord) -> Result<(), StoreError>;
}

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// One lazy, finite pass over a store, yielding records in
/// append order. Read failures mid-pass surface as items so a
/// lazy consumer still sees them.
pub type RecordStream<'a> = Box<dyn Iterator<Item = Result<UserRecord, StoreError>> + 'a>;

/// Any component that can read back all previously appended
/// records, in append order.
pub trait RecordSource {
    /// Start one full lazy pass over every stored record.
    /// Restartable: each call begins again from the first
    /// record. A missing or empty store yields an empty pass,
    /// not an error.
    fn list_all(&self) -> Result<RecordStream<'_>, StoreError>;
}

// ─── AttemptSink ──────────────────────────────────────────────────────────────
/// Any component that can record one entry per submission
/// attempt, accepted or rejected.
///
/// Implementations:
///   - AttemptLog → one timestamped line per attempt
pub trait AttemptSink {
    fn log_attempt(&mut self, entry: &LogEntry) -> Result<(), StoreError>;
}
