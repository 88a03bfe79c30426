// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the domain rules and the stores to
// accomplish one goal per use case:
//
//   submit_use_case.rs — validate → classify → append + log
//   list_use_case.rs   — read back everything in append order
//
// Rules for this layer:
//   - No validation logic here (that's Layer 3)
//   - No file handling here (that's Layer 6)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// The one invariant this layer owns: NEVER append unvalidated
// data. Everything else lives in the layers it belongs to.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The submission workflow
pub mod submit_use_case;

// The listing workflow
pub mod list_use_case;
