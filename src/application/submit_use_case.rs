// ============================================================
// Layer 2 — Submit Use Case
// ============================================================
// The session controller. One submission runs in order:
//
//   Step 1: Validate all three fields     (Layer 3 - domain)
//   Step 2: On failure  → log a REJECTED attempt, return the
//                         reason, and touch the store NOT AT ALL
//   Step 3: On success  → append the classified record to the
//                         store, then log an ACCEPTED attempt
//
// Deliberately thin: it sequences calls and carries exactly one
// invariant of its own — unvalidated data never reaches the
// store. A failed submit is invisible to every later listing.
//
// The use case is generic over the storage traits, so the tests
// below drive it against real temp-file stores and a failing
// sink without any conditional code in here.
//
// Reference: Rust Book §10 (Generics and Trait Bounds)

use crate::domain::classification::Classification;
use crate::domain::error::SubmitError;
use crate::domain::log_entry::LogEntry;
use crate::domain::traits::{AttemptSink, RecordSink};
use crate::domain::user_record::UserRecord;

/// Owns one store handle and one log handle for the session.
/// Constructed once with its targets and passed by reference —
/// there is no process-wide store state anywhere.
pub struct SubmitUseCase<S, L> {
    store: S,
    log:   L,
}

impl<S: RecordSink, L: AttemptSink> SubmitUseCase<S, L> {
    /// Create a new SubmitUseCase over a record sink and an
    /// attempt sink.
    pub fn new(store: S, log: L) -> Self {
        Self { store, log }
    }

    /// Validate, classify, persist, and log one submission.
    ///
    /// Returns the classification of the accepted record, or the
    /// first validation failure (field-specific), or the store
    /// error if either append target was unavailable. I/O errors
    /// are surfaced verbatim and never retried here — retry
    /// policy belongs to the caller.
    pub fn submit(
        &mut self,
        name:  &str,
        email: &str,
        age:   &str,
    ) -> Result<Classification, SubmitError> {
        match UserRecord::validated(name, email, age) {
            Ok(record) => {
                // Append first, then log: a record that failed to
                // persist must not be logged as accepted
                self.store.append(&record)?;
                self.log.log_attempt(&LogEntry::accepted(record.clone()))?;

                tracing::info!(
                    "Accepted entry for '{}' ({})",
                    record.name,
                    record.classification
                );
                Ok(record.classification)
            }
            Err(reason) => {
                tracing::info!("Rejected entry: {reason}");

                // Record the rejection, then report it — the store
                // is never touched on this path
                self.log.log_attempt(&LogEntry::rejected(reason.clone()))?;
                Err(SubmitError::Validation(reason))
            }
        }
    }
}
