//! Progress reporting types for one batch-analysis run
//!
//! Progress is scoped to a single run: it starts at zero, advances by an
//! equal share after each classified review, and is monotonically
//! non-decreasing until the run completes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one batch-analysis run with strong typing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new unique run ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress of the current batch-analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisProgress {
    /// Run this progress belongs to
    pub run_id: RunId,
    /// Completed percentage (0.0 to 100.0)
    pub completed: f64,
    /// Total number of reviews in this run
    pub total_items: usize,
    /// Timestamp of this progress update
    pub timestamp: DateTime<Utc>,
}

impl AnalysisProgress {
    /// Fresh progress for a run over `total_items` reviews.
    ///
    /// `total_items` must be non-zero; the batch runner skips empty runs
    /// before any progress is created.
    #[must_use]
    pub fn start(run_id: RunId, total_items: usize) -> Self {
        Self {
            run_id,
            completed: 0.0,
            total_items,
            timestamp: Utc::now(),
        }
    }

    /// Advances progress by one completed review (an equal share of 100)
    pub fn advance(&mut self) {
        self.completed += 100.0 / self.total_items as f64;
        self.timestamp = Utc::now();
    }

    /// Integer percentage for display surfaces, clamped to `[0, 100]`
    #[must_use]
    pub fn display_percent(&self) -> u8 {
        self.completed.round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_monotonic_and_ends_near_100() {
        let mut progress = AnalysisProgress::start(RunId::new(), 3);
        let mut previous = progress.completed;
        for _ in 0..3 {
            progress.advance();
            assert!(progress.completed >= previous);
            previous = progress.completed;
        }
        assert!((progress.completed - 100.0).abs() < 1e-9);
        assert_eq!(progress.display_percent(), 100);
    }

    #[test]
    fn single_item_run_jumps_to_100() {
        let mut progress = AnalysisProgress::start(RunId::new(), 1);
        progress.advance();
        assert_eq!(progress.display_percent(), 100);
    }

    #[test]
    fn display_percent_rounds() {
        let mut progress = AnalysisProgress::start(RunId::new(), 3);
        progress.advance();
        // 33.33.. rounds down
        assert_eq!(progress.display_percent(), 33);
        progress.advance();
        // 66.66.. rounds up
        assert_eq!(progress.display_percent(), 67);
    }
}
