// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs,
// enums, and functions that define what a user entry IS and
// when it is valid.
//
// Rules for this layer:
//   - NO file I/O or terminal interaction
//   - NO clap / tracing-subscriber / filesystem types
//   - Only plain Rust data, pure functions, and traits
//
// Why keep this layer pure?
//   - Every validator and the classifier can be unit tested
//     without touching a single file on disk
//   - The storage traits let Layer 6 be swapped out
//     (file store today, database tomorrow) without any
//     change to the validation rules
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A validated, classified user entry
pub mod user_record;

// The age-band classifier
pub mod classification;

// Per-field validation rules
pub mod validators;

// One attempt (accepted or rejected) for the attempt log
pub mod log_entry;

// The error taxonomy: validation failures and store failures
pub mod error;

// Core abstractions (traits) that the infra layer implements
pub mod traits;
