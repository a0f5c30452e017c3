//! Page-count summaries for selection operations.

use serde::{Deserialize, Serialize};

/// Summary of what a selection did to a document's pages.
///
/// Pure arithmetic over already-known counts; building one never fails.
/// Degenerate inputs (an empty document, or an affected count exceeding
/// the total) fall back to an all-zero summary rather than producing
/// nonsense percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStats {
    /// Pages in the source document.
    pub total: usize,
    /// Pages the operation extracted or deleted.
    pub affected: usize,
    /// Pages of the source not covered by the selection.
    pub remaining: usize,
    /// Affected pages as a percentage of the total.
    pub percentage: f64,
}

impl PageStats {
    /// Compute a summary from a total page count and the number of
    /// affected (selected) pages.
    ///
    /// The affected count must come from the resolved, deduplicated index
    /// set, so overlapping range tokens are counted once.
    pub fn new(total: usize, affected: usize) -> Self {
        if total == 0 || affected > total {
            return Self {
                total: 0,
                affected: 0,
                remaining: 0,
                percentage: 0.0,
            };
        }

        Self {
            total,
            affected,
            remaining: total - affected,
            percentage: (affected as f64 / total as f64) * 100.0,
        }
    }
}

impl std::fmt::Display for PageStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} page(s) ({:.1}%), {} remaining",
            self.affected, self.total, self.percentage, self.remaining
        )
    }
}
