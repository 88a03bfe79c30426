// ============================================================
// Layer 3 — Age-Band Classifier
// ============================================================
// Maps a validated age onto one of three bands:
//
//   | age range | classification |
//   |-----------|----------------|
//   | 1–17      | Underage       |
//   | 18–60     | Adult          |
//   | 61+       | Senior         |
//
// The classification is a pure function of age — it is derived
// at validation time and can always be recomputed, so it is
// never a source of truth on its own.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;

/// The age band a user entry falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Younger than 18
    Underage,

    /// 18 through 60 inclusive
    Adult,

    /// Older than 60
    Senior,
}

/// Classify an age into its band.
/// Total over all positive integers — every valid age maps
/// to exactly one band, with no gaps at the boundaries.
pub fn classify(age: i64) -> Classification {
    if age < 18 {
        Classification::Underage
    } else if age <= 60 {
        Classification::Adult
    } else {
        Classification::Senior
    }
}

/// Display the band as the label written to the record store
/// ("Category: Adult" etc.), so Display must stay stable.
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Underage => "Underage",
            Classification::Adult    => "Adult",
            Classification::Senior   => "Senior",
        };
        write!(f, "{label}")
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        // The boundaries are the part most likely to regress
        assert_eq!(classify(17), Classification::Underage);
        assert_eq!(classify(18), Classification::Adult);
        assert_eq!(classify(60), Classification::Adult);
        assert_eq!(classify(61), Classification::Senior);
    }

    #[test]
    fn test_band_interiors() {
        assert_eq!(classify(1),   Classification::Underage);
        assert_eq!(classify(30),  Classification::Adult);
        assert_eq!(classify(99),  Classification::Senior);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Classification::Underage.to_string(), "Underage");
        assert_eq!(Classification::Adult.to_string(),    "Adult");
        assert_eq!(Classification::Senior.to_string(),   "Senior");
    }
}
