// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-backed persistence for the two append targets:
//
//   record_store.rs — The record store. One human-readable
//                     line per ACCEPTED entry, appended to
//                     user_data.txt. Also the lazy reader
//                     that walks the file back into
//                     UserRecords in append order.
//
//   attempt_log.rs  — The attempt log. One timestamped line
//                     per attempt (accepted OR rejected),
//                     appended to app_logs.txt.
//
// Both follow the same scoped-acquisition discipline: open the
// file in append mode, write one fully formatted line, and let
// the handle drop on every exit path. Existing content is never
// truncated or rewritten, so the files only ever grow.
//
// Why is this a separate layer?
//   The domain rules never touch a file, and these two stores
//   never interpret a rule — each side can change (or be
//   swapped for a database) without disturbing the other.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §12 (I/O and File Handling)

/// Append-only record store and its lazy reader
pub mod record_store;

/// Append-only per-attempt log
pub mod attempt_log;
